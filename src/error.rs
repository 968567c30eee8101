//! Error types for roomsort.

use thiserror::Error;

/// Main error type for roomsort operations.
#[derive(Debug, Error)]
pub enum RoomsortError {
    /// Error in solver configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed roster record.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the source text.
        line: usize,
        /// What was wrong with the record.
        message: String,
    },

    /// Two roster records share the same name.
    #[error("duplicate person name: {0}")]
    DuplicateName(String),

    /// A person lists themselves as a roommate preference.
    #[error("{0} lists themselves as a roommate preference")]
    SelfPreference(String),

    /// The roster source could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for roomsort operations.
pub type Result<T> = std::result::Result<T, RoomsortError>;
