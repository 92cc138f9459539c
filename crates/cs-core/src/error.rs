//! Error types for cs-core

use thiserror::Error;

/// cs-core error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Empty {0} value")]
    EmptyValue(&'static str),

    #[error("Custom {0} category requires a non-empty label")]
    MissingCustomLabel(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Policy file error: {0}")]
    PolicyFile(#[from] toml::de::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
