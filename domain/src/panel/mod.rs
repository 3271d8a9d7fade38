//! Panel domain: settings, subgroup partitioning and run results.

pub mod entities;
pub mod partition;
pub mod settings;
pub mod value_objects;
