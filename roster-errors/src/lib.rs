//! Shared error taxonomy for the roster workspace: [`StoreError`] from
//! `roster-store`/`roster-db` and [`ParseError`] from `roster-parser`. Only
//! the query engine and dispatcher ever turn these into human-readable
//! reply strings; library crates never format user-facing text themselves.

use thiserror::Error;

/// The failure-kind taxonomy named by specification §7. Carried alongside
/// the richer `thiserror` variants below so callers that only care about the
/// category (not the detail) can match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    InvalidArgument,
    NotFound,
    Duplicate,
    ResourceExhausted,
    PermissionDenied,
    IoError,
}

/// Errors raised by [`roster_store`](../roster_store/index.html)'s `Table`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("key must be non-zero and the store config must be complete")]
    InvalidArgument,

    #[error("key already present")]
    Duplicate,

    #[error("key not found")]
    NotFound,

    #[error("resource exhausted")]
    ResourceExhausted,
}

impl StoreError {
    pub fn kind(&self) -> Kind {
        match self {
            StoreError::InvalidArgument => Kind::InvalidArgument,
            StoreError::Duplicate => Kind::Duplicate,
            StoreError::NotFound => Kind::NotFound,
            StoreError::ResourceExhausted => Kind::ResourceExhausted,
        }
    }
}

/// Errors raised while tokenizing or validating a request line.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("parameter {0:?} is not valid for this command")]
    InvalidParameter(String),

    #[error("parameter kind repeated more than once: {0:?}")]
    RepeatedParameter(String),

    #[error("field {field:?} has an invalid value {value:?}")]
    InvalidFieldValue { field: String, value: String },

    #[error("command requires a non-zero id")]
    MissingId,

    #[error("too many parameters (max {max})")]
    TooManyParameters { max: usize },

    #[error("token exceeds the maximum length of {max} bytes")]
    TokenTooLong { max: usize },

    #[error("empty request line")]
    EmptyLine,
}

impl ParseError {
    pub fn kind(&self) -> Kind {
        Kind::InvalidArgument
    }
}
