//! On-disk user records.
//!
//! The bcrypt hash only exists here; the domain [`User`] never carries it and
//! it is never serialized back to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::User;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    #[serde(default)]
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<StoredUser> for User {
    fn from(stored: StoredUser) -> Self {
        Self {
            id: stored.id.into(),
            username: stored.username,
            role: stored.role,
            created_at: stored.created_at,
        }
    }
}
