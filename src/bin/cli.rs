// src/bin/cli.rs
use lead_agent::{cli, log};

fn main() -> color_eyre::Result<()> {
    if let Err(e) = log::init(&log::default_path()) {
        eprintln!("Warning: debug log unavailable: {e}");
    }
    cli::run()
}
