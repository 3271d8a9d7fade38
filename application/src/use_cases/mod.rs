//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod conversation;
pub mod network;
pub mod panel_agent;
pub mod run_network;

#[cfg(test)]
pub(crate) mod test_support;
