// src/store.rs
//
// Model file = "LAFM" magic, u16 LE format version, JSON-encoded RandomForest.
// Saves overwrite wholesale; no locking.

use std::fs;
use std::path::Path;

use crate::forest::RandomForest;
use crate::{Error, Result};

const MAGIC: &[u8; 4] = b"LAFM";
const FORMAT_VERSION: u16 = 1;
const HEADER_LEN: usize = MAGIC.len() + 2;

pub fn save(model: &RandomForest, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let bytes = encode(model)?;
    fs::write(path, &bytes)?;
    logf!("Model: saved {} bytes → {}", bytes.len(), path.display());
    Ok(())
}

pub fn load(path: &Path) -> Result<RandomForest> {
    let bytes = fs::read(path)?;
    let model = decode(&bytes).map_err(|reason| Error::ModelFormat {
        path: path.to_path_buf(),
        reason,
    })?;
    logf!("Model: loaded {} ({} trees)", path.display(), model.trees().len());
    Ok(model)
}

pub fn encode(model: &RandomForest) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(4096);
    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    serde_json::to_writer(&mut buf, model)?;
    Ok(buf)
}

pub fn decode(bytes: &[u8]) -> std::result::Result<RandomForest, String> {
    if bytes.len() < HEADER_LEN || &bytes[..MAGIC.len()] != MAGIC {
        return Err(s!("not a lead_agent model file"));
    }
    let version = u16::from_le_bytes([bytes[4], bytes[5]]);
    if version != FORMAT_VERSION {
        return Err(format!("unsupported model format version {version} (expected {FORMAT_VERSION})"));
    }

    let model: RandomForest = serde_json::from_slice(&bytes[HEADER_LEN..])
        .map_err(|e| format!("corrupt model payload: {e}"))?;
    model.check()?;
    Ok(model)
}
