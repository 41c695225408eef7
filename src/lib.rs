//! Core library for the SPP inventory service.
//!
//! This crate exposes the domain entities, persisted record models, flat-file
//! repositories, input forms and service layers backing the auto parts and
//! wheels inventory. HTTP routing, token issuance and image byte transforms
//! live in the consuming application.

pub mod domain;
pub mod forms;
pub mod models;
pub mod repository;
pub mod services;

/// Role required for every mutating service operation.
pub const SERVICE_ACCESS_ROLE: &str = "admin";
