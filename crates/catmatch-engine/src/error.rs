use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("catalog entry {entry_id} has malformed stored specs: {source}")]
    MalformedSpecs {
        entry_id: i64,
        #[source]
        source: serde_json::Error,
    },
}
