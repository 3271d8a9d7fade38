//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - backend model identifiers
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod model;
