//! Strongly-typed value objects shared by the domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers and monetary values are checked once, at the boundary.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A monetary value could not be parsed as a decimal.
    #[error("{0} is not a valid decimal amount")]
    UnparsableAmount(&'static str),
    /// A monetary value was negative.
    #[error("{0} must be zero or greater")]
    NegativeAmount(&'static str),
    /// An identifier was not a valid UUID.
    #[error("invalid record id")]
    InvalidId,
    /// A status label is not one of the known wheel states.
    #[error("unknown wheel status: {0}")]
    UnknownStatus(String),
    /// A sold record is missing its sale payload.
    #[error("sold wheel is missing {0}")]
    MissingSaleField(&'static str),
    /// A condition label is not one of the known grades.
    #[error("unknown wheel condition: {0}")]
    UnknownCondition(String),
    /// A category key is not part of the fixed category table.
    #[error("unknown wheel category: {0}")]
    UnknownCategory(String),
    /// An image reference does not point inside the uploads root.
    #[error("invalid image reference: {0}")]
    InvalidImageRef(String),
}

/// Store-assigned identity of a persisted record.
///
/// Assigned on insert and immutable afterwards; callers never supply one at
/// creation time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier supplied by a caller (e.g. a URL segment).
    pub fn parse(value: &str) -> Result<Self, TypeConstraintError> {
        Uuid::from_str(value.trim())
            .map(Self)
            .map_err(|_| TypeConstraintError::InvalidId)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for RecordId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-negative monetary amount.
///
/// Persisted as a decimal string, matching the legacy data files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Wrap a decimal, rejecting negative amounts.
    pub fn new(value: Decimal) -> Result<Self, TypeConstraintError> {
        Self::new_for_field(value, "price")
    }

    /// Same as [`Self::new`] but with field-specific error context.
    pub fn new_for_field(
        value: Decimal,
        field: &'static str,
    ) -> Result<Self, TypeConstraintError> {
        if value.is_sign_negative() {
            Err(TypeConstraintError::NegativeAmount(field))
        } else {
            Ok(Self(value))
        }
    }

    /// Parse a decimal string, rejecting junk and negative amounts.
    pub fn parse(value: &str, field: &'static str) -> Result<Self, TypeConstraintError> {
        let parsed = value
            .trim()
            .parse::<Decimal>()
            .map_err(|_| TypeConstraintError::UnparsableAmount(field))?;
        Self::new_for_field(parsed, field)
    }

    /// Lenient parse used when materializing legacy records: missing,
    /// unparsable or negative input degrades to zero.
    pub fn lenient(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.trim().parse::<Decimal>().ok())
            .filter(|d| !d.is_sign_negative())
            .map(Self)
            .unwrap_or(Self::ZERO)
    }

    pub fn get(&self) -> Decimal {
        self.0
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
