//! Run Network use case
//!
//! Builds the panel from settings and drives one run end-to-end.

use crate::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::network::{Network, RunNetworkError};
use panel_domain::{Agent, AgentId, NetworkReport, PanelSettings, PromptTemplate};
use std::sync::Arc;
use tracing::info;

/// Input for the RunNetwork use case
#[derive(Debug, Clone)]
pub struct RunNetworkInput {
    /// Resolved discussion topic
    pub topic: String,
    /// Panel shape
    pub settings: PanelSettings,
    /// System prompt shared by every agent
    pub system_prompt: String,
}

impl RunNetworkInput {
    pub fn new(topic: impl Into<String>, settings: PanelSettings) -> Self {
        Self {
            topic: topic.into(),
            settings,
            system_prompt: PromptTemplate::panelist_system().to_string(),
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    /// Agents `Agent0..AgentN`, models cycled by roster index
    pub fn build_roster(&self) -> Vec<Agent> {
        (0..self.settings.agents)
            .map(|i| {
                Agent::new(
                    AgentId::numbered(i),
                    self.settings.model_for(i),
                    self.system_prompt.clone(),
                )
                .with_history_limit(self.settings.history_limit)
            })
            .collect()
    }
}

/// Use case for running a panel discussion
pub struct RunNetworkUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> RunNetworkUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunNetworkInput) -> Result<NetworkReport, RunNetworkError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunNetworkInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<NetworkReport, RunNetworkError> {
        input.settings.validate()?;

        let settings = &input.settings;
        info!(
            agents = settings.agents,
            groups = settings.groups,
            rounds = settings.rounds,
            steps = settings.steps,
            "Starting panel"
        );

        let mut network = Network::new(Arc::clone(&self.gateway), input.build_roster())
            .with_summary_model(settings.summary_model.clone())
            .with_max_concurrency(settings.max_concurrency)
            .with_conversation_logger(Arc::clone(&self.conversation_logger));

        network.create_subgroups(settings.subgroup_size())?;
        network
            .run(&input.topic, settings.rounds, settings.steps, progress)
            .await
    }
}
