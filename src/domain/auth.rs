//! Authenticated caller identity.
//!
//! Token issuance and session mechanics are the consuming application's
//! concern; services only see the resolved principal.

use serde::{Deserialize, Serialize};

/// Identity attached to every service call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub role: String,
}

impl Principal {
    pub fn new(username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: role.into(),
        }
    }
}

/// Check whether the principal holds the given role.
pub fn check_role(role: &str, principal: &Principal) -> bool {
    principal.role == role
}
