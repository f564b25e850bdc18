//! Configuration loading from TOML files.

pub mod logging;
pub mod settings;

pub use logging::LoggingConfig;
pub use settings::{Config, CONFIG_TEMPLATE};
