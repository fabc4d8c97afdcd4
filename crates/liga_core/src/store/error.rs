use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("deserialization error: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("store version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("league not found: {id}")]
    NotFound { id: String },
}

impl StoreError {
    /// Whether the in-memory session can keep going after this failure.
    /// A failed write never poisons current state; corrupted or
    /// incompatible documents do.
    pub fn is_recoverable(&self) -> bool {
        match self {
            StoreError::Io(_) => true,
            StoreError::NotFound { .. } => true,
            StoreError::Serialization(_) => true,
            StoreError::Deserialization(_) => false,
            StoreError::VersionMismatch { .. } => false,
        }
    }
}
