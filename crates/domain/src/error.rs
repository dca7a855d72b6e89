//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building values or levels.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The level name is not part of the severity table.
    #[error("unknown log level: {0}")]
    UnknownLevel(String),

    /// A serde value could not be converted into a log value.
    #[error("value could not be serialized: {0}")]
    InvalidSerialize(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
