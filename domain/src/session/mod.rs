//! Messages exchanged with the generation backend.
//!
//! - [`entities::Message`] - a single role-tagged message
//! - [`entities::Role`] - system / user / assistant

pub mod entities;
