//! Infrastructure layer for agent-panel
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the OpenAI-compatible gateway, the JSONL
//! conversation logger, plus configuration and context loading.

pub mod config;
pub mod context;
pub mod logging;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOpenAiConfig, FileOutputConfig,
    FilePanelConfig, FileProvidersConfig,
};
pub use context::LocalContextLoader;
pub use logging::JsonlConversationLogger;
pub use openai::OpenAiGateway;
