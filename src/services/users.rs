//! User account services.

use crate::domain::auth::Principal;
use crate::domain::user::User;
use crate::forms::add_error;
use crate::forms::users::AddUserForm;
use crate::repository::{RepositoryError, UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult, require_admin};

/// List all accounts. Password hashes never leave the repository.
pub fn list_users<R: UserReader>(principal: &Principal, repo: &R) -> ServiceResult<Vec<User>> {
    require_admin(principal)?;
    Ok(repo.list_users()?)
}

/// Create an account with a bcrypt-hashed password.
pub fn create_user<R: UserWriter>(
    form: AddUserForm,
    principal: &Principal,
    repo: &R,
) -> ServiceResult<User> {
    require_admin(principal)?;
    let new = form.into_new_user()?;
    match repo.create_user(new) {
        Ok(user) => Ok(user),
        Err(RepositoryError::Validation(message)) => {
            let mut errors = validator::ValidationErrors::new();
            add_error(&mut errors, "username", "unique", message);
            Err(ServiceError::Validation(errors))
        }
        Err(e) => Err(e.into()),
    }
}

/// Check credentials and resolve the caller's principal.
///
/// An unknown username and a wrong password are indistinguishable to the
/// caller.
pub fn authenticate<R: UserReader>(
    username: &str,
    password: &str,
    repo: &R,
) -> ServiceResult<Principal> {
    match repo.verify_password(username, password)? {
        Some(user) => Ok(Principal::new(user.username, user.role)),
        None => Err(ServiceError::Unauthorized),
    }
}
