//! Error types for cs-vcard

use thiserror::Error;

/// cs-vcard error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing BEGIN:VCARD/END:VCARD envelope")]
    MissingEnvelope,

    #[error("Card carries no contact information")]
    EmptyCard,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
