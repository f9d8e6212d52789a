pub mod config;
pub mod paths;

pub use config::{AuthorConfig, Config, LoggingConfig, LOG_LEVELS};
pub use paths::{PathManager, CONFIG_DIR_ENV};
