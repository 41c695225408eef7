//! Persisted record shapes.
//!
//! These structs mirror the legacy JSON data files (camelCase field names,
//! flat nullable sale columns) and convert to and from the domain entities.
//! Tolerance for legacy quirks (missing fields, lenient prices) lives in the
//! conversions here, nowhere else.

pub mod config;
pub mod part;
pub mod template;
pub mod user;
pub mod wheel;
