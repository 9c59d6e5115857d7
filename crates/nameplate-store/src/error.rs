use nameplate_core::PersonId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite error: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
    #[error("migration error: {0}")]
    Migration(String),
    #[error("database schema v{found} is newer than supported v{supported}")]
    SchemaTooNew { found: i64, supported: i64 },
    #[error("person {0} not found")]
    PersonNotFound(PersonId),
    #[error("email {0} is already taken")]
    DuplicateEmail(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// How callers should react to a failure, independent of its cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    NotFound,
    Conflict,
    InvalidInput,
    Internal,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::PersonNotFound(_) => StoreErrorKind::NotFound,
            StoreError::DuplicateEmail(_) => StoreErrorKind::Conflict,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidInput,
            StoreError::Io(_)
            | StoreError::Sql(_)
            | StoreError::MissingHomeDir
            | StoreError::Migration(_)
            | StoreError::SchemaTooNew { .. } => StoreErrorKind::Internal,
        }
    }
}
