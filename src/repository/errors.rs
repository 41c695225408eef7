use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::store::StoreError;

/// Error type shared by all repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The referenced id is absent from the collection.
    #[error("record not found")]
    NotFound,
    /// A stored record or slot file could not be materialized.
    #[error("corrupted store: {0}")]
    Corrupted(String),
    /// Caller-supplied data violates a repository-level constraint.
    #[error("{0}")]
    Validation(String),
    /// Underlying persistence failed.
    #[error("storage failure: {0}")]
    Storage(String),
    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    Password(#[from] bcrypt::BcryptError),
}

impl From<StoreError> for RepositoryError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Corrupted { .. } => Self::Corrupted(e.to_string()),
            StoreError::Encode { .. } | StoreError::Io(_) => Self::Storage(e.to_string()),
        }
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(e: TypeConstraintError) -> Self {
        Self::Corrupted(e.to_string())
    }
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
