mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, HttpConfig, LoggingConfig, ViewConfig, DEFAULT_ENDPOINT};
