use thiserror::Error;

/// Errors from durable client storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored record is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;
