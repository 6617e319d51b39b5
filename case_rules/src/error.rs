//! Error types for `case_rules`.

use thiserror::Error;

use crate::entities::EntityKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{kind} not found: {key}")]
    NotFound { kind: EntityKind, key: String },

    #[error("{kind} key already in use: {key:?}")]
    DuplicateKey { kind: EntityKind, key: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Only produced by integrity checks, never by a mutating call.
    #[error("integrity violation: {0}")]
    IntegrityViolation(String),

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn not_found(kind: EntityKind, key: impl ToString) -> Self {
        Error::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub fn duplicate(kind: EntityKind, key: impl Into<String>) -> Self {
        Error::DuplicateKey {
            kind,
            key: key.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
