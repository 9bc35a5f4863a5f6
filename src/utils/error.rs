use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Document store error (status {status}): {message}")]
    StoreError { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, CardError>;
