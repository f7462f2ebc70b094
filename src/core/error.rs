use thiserror::Error;

#[derive(Error, Debug)]
pub enum BaziError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External service failure: {0}")]
    ExternalService(String),

    #[error("Internal computation error: {0}")]
    InternalComputation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl BaziError {
    /// Shorthand for building an `InvalidInput` from anything printable
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, BaziError>;
