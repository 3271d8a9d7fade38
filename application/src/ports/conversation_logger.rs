//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording panel events
//! (turns, shared insights, the final report) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures the transcript in
//! a machine-readable format (JSONL).

use panel_domain::{AgentId, InsightSummary};
use serde_json::{Value, json};

/// A structured conversation event for logging.
pub struct ConversationEvent {
    /// Event type identifier (`run_started`, `turn`, `insight`, `final_report`).
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn run_started(topic: &str, agents: usize, subgroups: usize, rounds: usize) -> Self {
        Self::new(
            "run_started",
            json!({
                "topic": topic,
                "agents": agents,
                "subgroups": subgroups,
                "rounds": rounds,
            }),
        )
    }

    pub fn turn(subgroup: usize, agent: &AgentId, prompt: &str, response: &str) -> Self {
        Self::new(
            "turn",
            json!({
                "subgroup": subgroup,
                "agent": agent.as_str(),
                "prompt": prompt,
                "response": response,
            }),
        )
    }

    pub fn insight(insight: &InsightSummary) -> Self {
        Self::new(
            "insight",
            json!({
                "round": insight.round,
                "subgroup": insight.subgroup,
                "summary": insight.content,
            }),
        )
    }

    pub fn final_report(topic: &str, insights: usize, report: &str) -> Self {
        Self::new(
            "final_report",
            json!({
                "topic": topic,
                "insights": insights,
                "report": report,
            }),
        )
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is synchronous and infallible; write failures are swallowed by
/// the implementation.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
