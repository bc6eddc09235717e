pub mod app_config;
pub mod attributes;
pub mod config;
pub mod matching;
pub mod products;

pub use app_config::AppConfig;
pub use attributes::AttributeKind;
pub use config::{load_app_config, load_app_config_from_env};
pub use matching::MatchConfig;
pub use products::{AttributeMap, CatalogEntry, MatchReport, MatchResult, ScrapedProduct};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("configuration validation failed: {0}")]
    Validation(String),
}
