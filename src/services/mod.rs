//! Business logic, generic over the repository traits.
//!
//! Every function takes the authenticated [`Principal`] of the caller;
//! mutating operations additionally require [`crate::SERVICE_ACCESS_ROLE`].
//! Repository errors are logged here and mapped to [`ServiceError`] variants
//! so the HTTP layer can stay a thin wrapper.

use thiserror::Error;
use validator::ValidationErrors;

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::auth::{Principal, check_role};
use crate::repository::RepositoryError;

pub mod images;
pub mod import;
pub mod parts;
pub mod stats;
pub mod templates;
pub mod users;
pub mod wheels;

/// Generic error type used by service layer functions.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The principal is not allowed to perform the operation.
    #[error("unauthorized")]
    Unauthorized,
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// Caller-supplied data violates field constraints; every offending field
    /// is enumerated.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// A supplied file reference resolves outside the managed uploads root.
    #[error("invalid image path")]
    InvalidPath,
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

impl From<RepositoryError> for ServiceError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound => Self::NotFound,
            other => {
                log::error!("repository failure: {other}");
                Self::Internal
            }
        }
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Gate a mutating operation behind [`SERVICE_ACCESS_ROLE`].
pub(crate) fn require_admin(principal: &Principal) -> ServiceResult<()> {
    if check_role(SERVICE_ACCESS_ROLE, principal) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}
