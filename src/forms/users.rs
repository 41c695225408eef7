//! User account input forms.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::domain::user::NewUser;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddUserForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "username must be 1-50 characters"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
}

impl AddUserForm {
    /// Validate and convert into a creation payload. The clear-text password
    /// travels straight to the repository for hashing.
    pub fn into_new_user(self) -> Result<NewUser, ValidationErrors> {
        self.validate()?;
        Ok(NewUser {
            username: self.username.trim().to_string(),
            password: self.password,
            role: self.role.trim().to_string(),
        })
    }
}
