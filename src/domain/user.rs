//! User accounts.
//!
//! The domain view never carries the password hash; credential checks go
//! through the repository, which owns the stored hash.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::types::RecordId;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Information required to create a new [`User`]. The clear-text password is
/// consumed by the repository and hashed before anything touches disk.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: String,
}
