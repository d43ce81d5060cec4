//! # Store Error Types
//!
//! Error types for catalog loading and the calculation log.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error / ValidationError                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path or record id            │
//! │       │                                                                 │
//! │       ├──► CliError::Store (catalog loading at startup)                │
//! │       │                                                                 │
//! │       └──► CoreError::Persistence (ResultSink::store)                  │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │            logged and swallowed by the calculator                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use rebate_core::{CoreError, ValidationError};
use thiserror::Error;

/// Catalog and log errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Two records of the same kind share an identifier.
    ///
    /// ## When This Occurs
    /// - A catalog file lists the same rebate twice
    /// - A catalog file lists the same product twice
    #[error("Duplicate {entity}: '{identifier}' already exists")]
    DuplicateRecord {
        entity: &'static str,
        identifier: String,
    },

    /// Reading or writing a catalog file failed.
    #[error("Failed to access catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON or does not match the record shape.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record failed field validation.
    #[error("Invalid {entity} '{identifier}': {source}")]
    Validation {
        entity: &'static str,
        identifier: String,
        #[source]
        source: ValidationError,
    },

    /// A lock guarding the calculation log was poisoned by a panicking writer.
    #[error("Calculation log is unavailable: lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Creates a DuplicateRecord error.
    pub fn duplicate(entity: &'static str, identifier: impl Into<String>) -> Self {
        StoreError::DuplicateRecord {
            entity,
            identifier: identifier.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Store failures reach the calculator only through `ResultSink::store`.
impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Persistence(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
