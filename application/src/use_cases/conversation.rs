//! Round-robin conversation among the agents of one subgroup.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::ProgressNotifier;
use crate::use_cases::panel_agent::PanelAgent;
use panel_domain::PromptTemplate;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A conversation on one topic among a fixed list of agents.
///
/// The agents are shared with the owning network, not copied. The
/// speaking cursor is stored on the conversation, so a second call to
/// [`start_conversation`](Self::start_conversation) continues the rotation
/// where the previous call stopped. The transcript only grows.
pub struct Conversation<G: LlmGateway + 'static> {
    subgroup: usize,
    agents: Vec<Arc<PanelAgent<G>>>,
    topic: String,
    transcript: Vec<String>,
    cursor: usize,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> Conversation<G> {
    pub fn new(agents: Vec<Arc<PanelAgent<G>>>, topic: impl Into<String>) -> Self {
        Self {
            subgroup: 0,
            agents,
            topic: topic.into(),
            transcript: Vec::new(),
            cursor: 0,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Tag this conversation with the index of the subgroup it belongs to.
    pub fn for_subgroup(mut self, subgroup: usize) -> Self {
        self.subgroup = subgroup;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn subgroup(&self) -> usize {
        self.subgroup
    }

    pub fn agents(&self) -> &[Arc<PanelAgent<G>>] {
        &self.agents
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Index of the agent that speaks next
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Run exactly `max_steps` turns.
    ///
    /// The first prompt is `initial_prompt`, or an opening derived from the
    /// topic. Each later prompt quotes the previous speaker's reply. Error
    /// sentinels are fed forward like any other reply.
    pub async fn start_conversation(
        &mut self,
        initial_prompt: Option<&str>,
        max_steps: usize,
        progress: &dyn ProgressNotifier,
    ) {
        if self.agents.is_empty() {
            warn!(subgroup = self.subgroup, "Conversation has no agents, skipping");
            return;
        }

        info!(
            subgroup = self.subgroup,
            steps = max_steps,
            "Starting conversation on topic: {}",
            self.topic
        );

        let mut prompt = match initial_prompt {
            Some(p) => p.to_string(),
            None => PromptTemplate::opening(&self.topic),
        };

        for _ in 0..max_steps {
            let agent = Arc::clone(&self.agents[self.cursor]);
            debug!(subgroup = self.subgroup, agent = %agent.id(), "Agent's turn");

            let response = agent.generate_response(&prompt).await;

            self.transcript
                .push(PromptTemplate::transcript_line(agent.id().as_str(), &response));
            progress.on_turn(self.subgroup, agent.id(), &response);
            self.conversation_logger.log(ConversationEvent::turn(
                self.subgroup,
                agent.id(),
                &prompt,
                &response,
            ));

            prompt = PromptTemplate::follow_up(agent.id().as_str(), &response);
            self.cursor = (self.cursor + 1) % self.agents.len();
        }

        debug!(subgroup = self.subgroup, "Conversation finished");
    }
}
