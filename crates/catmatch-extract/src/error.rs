use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("failed to read rules file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rules file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid rule for label \"{label}\": {reason}")]
    InvalidRule { label: String, reason: String },

    #[error("rule table is empty")]
    EmptyTable,
}
