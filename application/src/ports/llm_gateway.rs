//! LLM Gateway port
//!
//! Defines the interface for communicating with the text-generation backend.

use async_trait::async_trait;
use panel_domain::{Message, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

impl GatewayError {
    /// Whether the same request could succeed if sent again later.
    ///
    /// Nothing in the panel retries; the classification is reported in logs.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            GatewayError::ConnectionError(_) | GatewayError::RateLimited(_) | GatewayError::Timeout
        )
    }
}

/// Gateway for LLM communication
///
/// The backend is stateless: every call carries the full message list
/// (system prompt first) and returns the generated text.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Generate a completion for `messages` with `model`
    async fn chat(&self, model: &Model, messages: &[Message]) -> Result<String, GatewayError>;
}
