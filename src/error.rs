//! Error types for RakshaStem

use thiserror::Error;

/// RakshaStem error type
#[derive(Error, Debug)]
pub enum RakshaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for RakshaError {
    fn from(e: toml::de::Error) -> Self {
        RakshaError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RakshaError>;
