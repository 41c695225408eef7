//! Domain entities and value objects.
//!
//! Everything in this module is plain data with no I/O. The persisted
//! representations live in [`crate::models`]; the conversions between the two
//! are the only place legacy on-disk quirks are tolerated.

pub mod auth;
pub mod image;
pub mod part;
pub mod sku;
pub mod template;
pub mod types;
pub mod user;
pub mod wheel;
