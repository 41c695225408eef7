//! Image blob references.
//!
//! A wheel owns an ordered list of references of the form
//! `/uploads/{name}.{ext}`. References may originate from client input, so
//! parsing rejects anything that could escape the uploads root.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// URL prefix under which stored image blobs are served.
pub const UPLOADS_PREFIX: &str = "/uploads/";

/// Opaque reference to a stored image blob, owned by exactly one wheel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Parse a reference supplied by a caller.
    ///
    /// The reference must be a single file name under [`UPLOADS_PREFIX`]:
    /// no empty names, no `..`, no nested path separators.
    pub fn parse(value: &str) -> Result<Self, TypeConstraintError> {
        let invalid = || TypeConstraintError::InvalidImageRef(value.to_string());
        let name = value.strip_prefix(UPLOADS_PREFIX).ok_or_else(invalid)?;
        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains('/')
            || name.contains('\\')
        {
            return Err(invalid());
        }
        Ok(Self(value.to_string()))
    }

    /// Build a reference for a freshly stored blob file name.
    pub(crate) fn from_file_name(name: &str) -> Self {
        Self(format!("{UPLOADS_PREFIX}{name}"))
    }

    /// File name component, without the uploads prefix.
    pub fn file_name(&self) -> &str {
        &self.0[UPLOADS_PREFIX.len()..]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ImageRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
