//! Context loading infrastructure
//!
//! - [`LocalContextLoader`] - turns `--file`/`--text` into the discussion topic

mod loader;

pub use loader::LocalContextLoader;
