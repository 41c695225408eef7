//! Flat-file user repository.
//!
//! Passwords enter as clear text, are hashed with bcrypt before touching
//! disk, and only the hash is ever compared afterwards.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::{NewUser, User};
use crate::models::user::StoredUser;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::store::Slot;
use crate::repository::{JsonRepository, UserReader, UserWriter};

impl UserReader for JsonRepository {
    fn list_users(&self) -> RepositoryResult<Vec<User>> {
        let stored: Vec<StoredUser> = self.store().load(Slot::Users)?;
        Ok(stored.into_iter().map(User::from).collect())
    }

    fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>> {
        Ok(self
            .list_users()?
            .into_iter()
            .find(|u| u.username == username))
    }

    fn verify_password(&self, username: &str, password: &str) -> RepositoryResult<Option<User>> {
        let stored: Vec<StoredUser> = self.store().load(Slot::Users)?;
        let Some(user) = stored.into_iter().find(|u| u.username == username) else {
            return Ok(None);
        };
        if bcrypt::verify(password, &user.password_hash)? {
            Ok(Some(user.into()))
        } else {
            Ok(None)
        }
    }
}

impl UserWriter for JsonRepository {
    fn create_user(&self, new: NewUser) -> RepositoryResult<User> {
        let store = self.store();
        let _guard = store.guard(Slot::Users);
        let mut stored: Vec<StoredUser> = store.load(Slot::Users)?;
        if stored.iter().any(|u| u.username == new.username) {
            return Err(RepositoryError::Validation(format!(
                "username {} is already taken",
                new.username
            )));
        }
        let user = StoredUser {
            id: Uuid::new_v4(),
            username: new.username,
            password_hash: bcrypt::hash(&new.password, bcrypt::DEFAULT_COST)?,
            role: new.role,
            created_at: Utc::now(),
        };
        stored.push(user.clone());
        store.save(Slot::Users, &stored)?;
        Ok(user.into())
    }
}
