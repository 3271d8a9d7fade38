//! Agent domain: panel members and their bounded histories.

pub mod entities;
pub mod value_objects;
