//! Network of subgroups: concurrent rounds, insight sharing, final report.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::ProgressNotifier;
use crate::use_cases::conversation::Conversation;
use crate::use_cases::panel_agent::PanelAgent;
use futures::future::join_all;
use panel_domain::prompt::template::{EMPTY_REPORT, EMPTY_SUMMARY, REPORT_ERROR, SUMMARY_ERROR};
use panel_domain::{
    Agent, DomainError, InsightSummary, Message, Model, NetworkReport, Phase, PromptTemplate,
    SubgroupTranscript, partition_roster,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Semaphore;
use tracing::{info, warn};

/// Errors that can occur while running a network
#[derive(Error, Debug)]
pub enum RunNetworkError {
    #[error("No subgroups created. Please create subgroups first.")]
    NoSubgroups,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// All agents of a panel, split into subgroups that discuss in parallel.
///
/// Call [`create_subgroups`](Self::create_subgroups) before
/// [`start_conversations`](Self::start_conversations). The network never
/// reaches into agent state; summaries reach other subgroups through
/// [`PanelAgent::inject`].
pub struct Network<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    agents: Vec<Arc<PanelAgent<G>>>,
    subgroups: Vec<Vec<Arc<PanelAgent<G>>>>,
    shared_insights: Vec<InsightSummary>,
    summary_model: Model,
    max_concurrency: Option<usize>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> Network<G> {
    pub fn new(gateway: Arc<G>, agents: Vec<Agent>) -> Self {
        let agents = agents
            .into_iter()
            .map(|agent| Arc::new(PanelAgent::new(agent, Arc::clone(&gateway))))
            .collect();

        Self {
            gateway,
            agents,
            subgroups: Vec::new(),
            shared_insights: Vec::new(),
            summary_model: Model::default(),
            max_concurrency: None,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Model used for subgroup summaries and the final report
    pub fn with_summary_model(mut self, model: Model) -> Self {
        self.summary_model = model;
        self
    }

    /// Cap the number of subgroups talking at once (`None` = no cap)
    pub fn with_max_concurrency(mut self, limit: Option<usize>) -> Self {
        self.max_concurrency = limit;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn agents(&self) -> &[Arc<PanelAgent<G>>] {
        &self.agents
    }

    pub fn subgroups(&self) -> &[Vec<Arc<PanelAgent<G>>>] {
        &self.subgroups
    }

    /// Every summary shared so far, in round × subgroup order
    pub fn shared_insights(&self) -> &[InsightSummary] {
        &self.shared_insights
    }

    /// Split the roster into contiguous subgroups of `size`.
    ///
    /// Replaces any earlier partition. The last subgroup may be smaller.
    pub fn create_subgroups(&mut self, size: usize) -> Result<(), RunNetworkError> {
        self.subgroups = partition_roster(&self.agents, size)?;
        info!(
            agents = self.agents.len(),
            subgroups = self.subgroups.len(),
            "Created subgroups of size {}",
            size
        );
        Ok(())
    }

    /// Run the whole discussion and return the final report text.
    pub async fn start_conversations(
        &mut self,
        topic: &str,
        num_rounds: usize,
        max_steps: usize,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, RunNetworkError> {
        Ok(self
            .run(topic, num_rounds, max_steps, progress)
            .await?
            .final_report)
    }

    /// Run the whole discussion and return the structured report.
    ///
    /// Round 1 opens every subgroup from the topic. Before each later
    /// round the subgroup summaries are shared, then every subgroup
    /// continues with the same literal round prompt.
    pub async fn run(
        &mut self,
        topic: &str,
        num_rounds: usize,
        max_steps: usize,
        progress: &dyn ProgressNotifier,
    ) -> Result<NetworkReport, RunNetworkError> {
        if self.subgroups.is_empty() {
            return Err(RunNetworkError::NoSubgroups);
        }

        self.conversation_logger.log(ConversationEvent::run_started(
            topic,
            self.agents.len(),
            self.subgroups.len(),
            num_rounds,
        ));

        let mut conversations: Vec<Conversation<G>> = self
            .subgroups
            .iter()
            .enumerate()
            .map(|(i, agents)| {
                Conversation::new(agents.clone(), topic)
                    .for_subgroup(i)
                    .with_conversation_logger(Arc::clone(&self.conversation_logger))
            })
            .collect();

        info!("Starting initial round of discussions");
        self.run_round(&mut conversations, None, max_steps, 0, progress)
            .await;

        for round in 1..num_rounds {
            info!("Starting round {} of discussions", round + 1);
            self.share_insights(&conversations, round, progress).await;

            let prompt = PromptTemplate::round_opening(round);
            self.run_round(&mut conversations, Some(&prompt), max_steps, round, progress)
                .await;
        }

        let final_report = self.generate_final_report(topic, progress).await;

        Ok(NetworkReport {
            topic: topic.to_string(),
            rounds: num_rounds,
            subgroups: conversations
                .iter()
                .map(|c| SubgroupTranscript {
                    agents: c.agents().iter().map(|a| a.id().to_string()).collect(),
                    lines: c.transcript().to_vec(),
                })
                .collect(),
            insights: self.shared_insights.clone(),
            final_report,
        })
    }

    /// Run one round in every subgroup; returns once all have finished.
    async fn run_round(
        &self,
        conversations: &mut [Conversation<G>],
        prompt: Option<&str>,
        max_steps: usize,
        round: usize,
        progress: &dyn ProgressNotifier,
    ) {
        progress.on_phase_start(&Phase::Discussion, round + 1, conversations.len() * max_steps);

        let limit = self
            .max_concurrency
            .unwrap_or(conversations.len())
            .max(1);
        let semaphore = Semaphore::new(limit);
        let semaphore = &semaphore;

        let turns = conversations.iter_mut().map(|conversation| async move {
            let Ok(_permit) = semaphore.acquire().await else {
                warn!(subgroup = conversation.subgroup(), "Concurrency limiter closed");
                return;
            };
            conversation
                .start_conversation(prompt, max_steps, progress)
                .await;
        });
        join_all(turns).await;

        progress.on_phase_complete(&Phase::Discussion, round + 1);
    }

    /// Summarize each subgroup in order and inject the summary into every
    /// agent of every other subgroup.
    ///
    /// `round` is the 0-based index of the round about to start. A failed
    /// summary is logged and replaced by the
    /// `"Error summarizing conversation."` sentinel, which is shared like
    /// any other summary.
    pub async fn share_insights(
        &mut self,
        conversations: &[Conversation<G>],
        round: usize,
        progress: &dyn ProgressNotifier,
    ) {
        info!("Sharing insights between subgroups");
        progress.on_phase_start(&Phase::InsightSharing, round, conversations.len());

        for (i, conversation) in conversations.iter().enumerate() {
            let transcript = conversation.transcript().join("\n");

            let summary = match self.summarize_conversation(&transcript).await {
                Ok(summary) => summary,
                Err(e) => {
                    warn!(subgroup = i + 1, "Error summarizing conversation: {}", e);
                    SUMMARY_ERROR.to_string()
                }
            };
            info!(subgroup = i + 1, "Summary of subgroup: {}", summary);

            let insight = InsightSummary::new(round, i, summary);
            progress.on_insight(&insight);
            self.conversation_logger.log(ConversationEvent::insight(&insight));

            let shared = PromptTemplate::shared_summary(i, &insight.content);
            for (j, subgroup) in self.subgroups.iter().enumerate() {
                if i == j {
                    continue;
                }
                for agent in subgroup {
                    agent.inject(shared.clone()).await;
                }
            }

            self.shared_insights.push(insight);
        }

        progress.on_phase_complete(&Phase::InsightSharing, round);
    }

    /// Condense every insight shared during the run into one report.
    ///
    /// Never fails: a backend error yields the
    /// `"Error summarizing shared insights."` sentinel.
    pub async fn generate_final_report(&self, topic: &str, progress: &dyn ProgressNotifier) -> String {
        info!("Generating final report");
        progress.on_phase_start(&Phase::FinalReport, 0, 1);

        let insights = self
            .shared_insights
            .iter()
            .map(|insight| insight.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let messages = [
            Message::system(PromptTemplate::final_report_system(topic)),
            Message::user(insights),
        ];

        let report = match self.gateway.chat(&self.summary_model, &messages).await {
            Ok(text) if text.is_empty() => EMPTY_REPORT.to_string(),
            Ok(text) => text,
            Err(e) => {
                warn!("Error summarizing shared insights: {}", e);
                REPORT_ERROR.to_string()
            }
        };

        self.conversation_logger.log(ConversationEvent::final_report(
            topic,
            self.shared_insights.len(),
            &report,
        ));
        progress.on_phase_complete(&Phase::FinalReport, 0);
        report
    }

    async fn summarize_conversation(&self, transcript: &str) -> Result<String, GatewayError> {
        let messages = [
            Message::system(PromptTemplate::summary_system()),
            Message::user(transcript),
        ];
        let summary = self.gateway.chat(&self.summary_model, &messages).await?;
        if summary.is_empty() {
            return Ok(EMPTY_SUMMARY.to_string());
        }
        Ok(summary)
    }
}
