/// A specialized Result type for skroll operations.
pub type SkrollResult<T> = Result<T, SkrollError>;

/// Error type for configuration and setup.
///
/// Only configuration is fallible. Runtime effects never raise: missing
/// DOM targets, failed image loads, and degenerate scroll geometry all
/// degrade to "no visual update" instead.
#[derive(Debug, thiserror::Error)]
pub enum SkrollError {
    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SkrollError {
    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        SkrollError::Config(message.into())
    }
}
