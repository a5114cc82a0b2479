use thiserror::Error;

/// Error type shared by the store, the model factories and the storage backends.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Period index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StateError>;

impl StateError {
    pub fn out_of_range(index: usize, len: usize) -> Self {
        StateError::IndexOutOfRange { index, len }
    }
}
