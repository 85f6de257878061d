// Settings service
// Loads and saves the TOML configuration file

mod service;

pub use service::{SettingsService, CONFIG_PATH_ENV};
