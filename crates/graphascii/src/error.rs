//! Facade-level errors: parsing failures plus the core engine's own errors, in one type so
//! callers composing ingestion and rendering don't have to juggle two error enums.

use graphascii_core::Error as CoreError;

#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("line {line}: {message}")]
    DotParse { message: String, line: usize },

    #[error(transparent)]
    Core(#[from] CoreError<String>),
}

pub type Result<T> = std::result::Result<T, AdapterError>;
