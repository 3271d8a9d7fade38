//! Application layer for agent-panel
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::conversation::Conversation;
pub use use_cases::network::{Network, RunNetworkError};
pub use use_cases::panel_agent::PanelAgent;
pub use use_cases::run_network::{RunNetworkInput, RunNetworkUseCase};
