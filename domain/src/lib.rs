//! Domain layer for agent-panel
//!
//! This crate contains the core rules of a panel discussion. It has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Agent**: one panel member with a model, a system prompt and a
//!   bounded history
//! - **Subgroup**: a contiguous slice of the roster holding its own
//!   conversation
//! - **Round**: every subgroup takes a fixed number of turns
//! - **Insight sharing**: between rounds each subgroup's transcript is
//!   summarized and injected into the other subgroups' agents

pub mod agent;
pub mod config;
pub mod core;
pub mod panel;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use agent::{
    entities::{Agent, DEFAULT_HISTORY_LIMIT},
    value_objects::AgentId,
};
pub use config::OutputFormat;
pub use core::{error::DomainError, model::Model};
pub use panel::{
    entities::Phase,
    partition::{partition_roster, subgroup_count},
    settings::{ContextSource, PanelSettings},
    value_objects::{InsightSummary, NetworkReport, SubgroupTranscript},
};
pub use prompt::PromptTemplate;
pub use session::entities::{Message, Role};
