// src/config/consts.rs

// Net config
pub const DEFAULT_URL: &str = "https://www.madkudu.com";
pub const USER_AGENT: &str = concat!("lead_agent/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Extraction
pub const FALLBACK_TITLE: &str = "No title found";
pub const FALLBACK_VALUE_PROPOSITION: &str = "No value proposition found.";
pub const SECTION_LIMIT: usize = 3;
pub const SCRAPE_ERROR_PREFIX: &str = "Failed to scrape website: ";

// Note
pub const DEFAULT_COMPANY: &str = "MadKudu";
pub const NOTE_TEMPLATE: &str = "Hello {contact_name},\n\n\
I recently explored {company_name} and was impressed by its innovative approach: \
'{value_proposition}'. Your role as {job_title} must be key to its success. \
I would love to connect and learn more about your experience.";

// Training
pub const SEED: u64 = 42;
pub const TEST_FRACTION: f64 = 0.2;
pub const N_TREES: usize = 100;
pub const MIN_SAMPLES_SPLIT: usize = 2;
pub const MIN_TRAINING_ROWS: usize = 2;

// Local files
pub const DEFAULT_MODEL_FILE: &str = "model.pkl";
pub const DEFAULT_CONFIG_FILE: &str = "lead_agent.toml";
pub const ENV_PREFIX: &str = "LEAD_AGENT";
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Window
pub const WINDOW_TITLE: &str = "MadKudu AI Agent";
pub const WINDOW_W: f32 = 600.0;
pub const WINDOW_H: f32 = 400.0;
