//! Scripted gateway and recording progress for use case tests.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::ProgressNotifier;
use async_trait::async_trait;
use panel_domain::{AgentId, InsightSummary, Message, Model, Phase, PromptTemplate};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

type FailPredicate = Box<dyn Fn(&[Message]) -> bool + Send + Sync>;

/// Gateway that answers from a counter and records every request.
///
/// - summary requests get `"summary of <n> lines"`
/// - final report requests get `"report from <n> insights"`
/// - every other request gets `"reply <k>"` with a global call counter
pub(crate) struct ScriptedGateway {
    calls: Mutex<Vec<(Model, Vec<Message>)>>,
    counter: AtomicUsize,
    fail_if: Option<FailPredicate>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            counter: AtomicUsize::new(0),
            fail_if: None,
        }
    }

    pub fn failing_when(predicate: impl Fn(&[Message]) -> bool + Send + Sync + 'static) -> Self {
        Self {
            fail_if: Some(Box::new(predicate)),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<(Model, Vec<Message>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn is_summary_request(messages: &[Message]) -> bool {
        messages
            .first()
            .is_some_and(|m| m.content == PromptTemplate::summary_system())
    }

    pub fn is_report_request(messages: &[Message]) -> bool {
        messages.first().is_some_and(|m| {
            m.content
                .starts_with("You are an AI assistant that summarizes a set of shared insights")
        })
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn chat(&self, model: &Model, messages: &[Message]) -> Result<String, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.clone(), messages.to_vec()));

        if let Some(fail_if) = &self.fail_if
            && fail_if(messages)
        {
            return Err(GatewayError::RequestFailed("scripted failure".to_string()));
        }

        let last = messages.last().map(|m| m.content.as_str()).unwrap_or("");
        if Self::is_summary_request(messages) {
            return Ok(format!("summary of {} lines", last.lines().count()));
        }
        if Self::is_report_request(messages) {
            return Ok(format!("report from {} insights", last.lines().count()));
        }

        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(format!("reply {}", n))
    }
}

/// Progress notifier that records every callback as a string.
#[derive(Default)]
pub(crate) struct RecordingProgress {
    pub events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressNotifier for RecordingProgress {
    fn on_phase_start(&self, phase: &Phase, round: usize, total_tasks: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("start {} {} {}", phase.as_str(), round, total_tasks));
    }

    fn on_phase_complete(&self, phase: &Phase, round: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("end {} {}", phase.as_str(), round));
    }

    fn on_turn(&self, subgroup: usize, agent: &AgentId, _response: &str) {
        self.events
            .lock()
            .unwrap()
            .push(format!("turn {} {}", subgroup, agent));
    }

    fn on_insight(&self, insight: &InsightSummary) {
        self.events
            .lock()
            .unwrap()
            .push(format!("insight {} {}", insight.round, insight.subgroup));
    }
}
