// src/log.rs
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

use crate::config::consts::{LOG_FILE, STORE_DIR};

#[doc(hidden)]
pub use tracing as __tracing;

/// Route `logf!`/`logd!`/`loge!` into an append-only file.
/// Level comes from `RUST_LOG`, defaulting to `info`.
pub fn init(path: &Path) -> crate::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Second init (tests, embedding) keeps whichever subscriber came first.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_timer(Uptime::default())
        .try_init();

    Ok(())
}

/// `.store/debug.log` under the working directory.
pub fn default_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}
