use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodexError {
    #[error("Remote catalog error: {0}")]
    Remote(String),

    #[error("Snapshot '{0}' not found")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CodexResult<T> = Result<T, CodexError>;
