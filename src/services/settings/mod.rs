// Settings service
// Loads and saves user interface preferences as TOML

mod service;

pub use service::SettingsService;
