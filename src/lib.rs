// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod forest;
pub mod log;
pub mod note;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod store;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
