// crates/kladr-core/src/error.rs
use thiserror::Error;

/// Errors raised by the resolver, the search engine and the dataset loader.
#[derive(Debug, Error)]
pub enum KladrError {
    /// Unsupported level name or malformed argument.
    #[error("{0}")]
    Usage(String),

    /// A code too short to address even a region and a district.
    #[error("Code is too short: {code}")]
    InputTooShort { code: String },

    /// The backing store failed while answering a query. The in-memory
    /// store never fails; this is what other [`crate::LevelStore`] backends
    /// return.
    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// The three-way failure taxonomy a caller (e.g. a CLI shell) reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    InputTooShort,
    Store,
}

impl KladrError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KladrError::Usage(_) => ErrorKind::Usage,
            KladrError::InputTooShort { .. } => ErrorKind::InputTooShort,
            // Everything the loader or the engine can raise is a store failure.
            _ => ErrorKind::Store,
        }
    }
}

pub type Result<T> = std::result::Result<T, KladrError>;
