//! Panel agent: a domain [`Agent`] bound to the generation backend.

use crate::ports::llm_gateway::LlmGateway;
use panel_domain::prompt::template::{EMPTY_RESPONSE, RESPONSE_ERROR};
use panel_domain::{Agent, AgentId, Message, Model};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// One discussion participant that can talk to the backend.
///
/// The agent state sits behind an async mutex that is held for the whole
/// generation turn, so history updates from a turn and from
/// [`PanelAgent::inject`] never interleave.
pub struct PanelAgent<G: LlmGateway + 'static> {
    id: AgentId,
    model: Model,
    state: Mutex<Agent>,
    gateway: Arc<G>,
}

impl<G: LlmGateway + 'static> PanelAgent<G> {
    pub fn new(agent: Agent, gateway: Arc<G>) -> Self {
        Self {
            id: agent.id().clone(),
            model: agent.model().clone(),
            state: Mutex::new(agent),
            gateway,
        }
    }

    pub fn id(&self) -> &AgentId {
        &self.id
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Answer `prompt`, keeping the exchange in the history.
    ///
    /// Never fails: a backend error is logged and replaced by the
    /// `"Error generating response."` sentinel. The prompt stays in the
    /// history either way; the reply is only recorded on success.
    pub async fn generate_response(&self, prompt: &str) -> String {
        let mut agent = self.state.lock().await;
        let request = agent.begin_turn(prompt);

        debug!(
            agent = %self.id,
            model = %self.model,
            messages = request.len(),
            "Requesting completion"
        );

        let response = match self.gateway.chat(&self.model, &request).await {
            Ok(text) => {
                let text = if text.is_empty() {
                    EMPTY_RESPONSE.to_string()
                } else {
                    text
                };
                agent.record_reply(text.clone());
                text
            }
            Err(e) => {
                warn!(
                    agent = %self.id,
                    transient = e.is_transient(),
                    "Error generating response: {}",
                    e
                );
                RESPONSE_ERROR.to_string()
            }
        };

        agent.end_turn();
        response
    }

    /// Snapshot of the current history, oldest first
    pub async fn history(&self) -> Vec<Message> {
        self.state.lock().await.history().to_vec()
    }

    /// Append a synthetic user message without a generation call.
    ///
    /// The history bound is not enforced here; the next
    /// [`generate_response`](Self::generate_response) trims it.
    pub async fn inject(&self, content: impl Into<String>) {
        self.state.lock().await.inject(content);
    }

    pub async fn clear_history(&self) {
        self.state.lock().await.clear_history();
    }
}
