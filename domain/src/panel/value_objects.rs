//! Panel value objects - immutable result types of a panel run.
//!
//! - [`InsightSummary`] - One subgroup's summary from one sharing phase
//! - [`SubgroupTranscript`] - Members and full transcript of one subgroup
//! - [`NetworkReport`] - Complete result of a run

use serde::{Deserialize, Serialize};

/// Summary of one subgroup's discussion, shared with the other subgroups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightSummary {
    /// Round index (1-based) whose sharing phase produced this summary
    pub round: usize,
    /// Subgroup index (0-based) that was summarized
    pub subgroup: usize,
    /// The summary text
    pub content: String,
}

impl InsightSummary {
    pub fn new(round: usize, subgroup: usize, content: impl Into<String>) -> Self {
        Self {
            round,
            subgroup,
            content: content.into(),
        }
    }
}

/// Members and transcript of one subgroup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubgroupTranscript {
    /// Agent ids in speaking order
    pub agents: Vec<String>,
    /// `"<agent id>: <text>"` lines, one per turn
    pub lines: Vec<String>,
}

/// Complete result of a panel run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkReport {
    /// Discussion topic
    pub topic: String,
    /// Number of discussion rounds run
    pub rounds: usize,
    /// Per-subgroup transcripts
    pub subgroups: Vec<SubgroupTranscript>,
    /// Every insight shared during the run, in round × subgroup order
    pub insights: Vec<InsightSummary>,
    /// Final synthesized report
    pub final_report: String,
}

impl NetworkReport {
    /// Total number of turns taken across all subgroups
    pub fn total_turns(&self) -> usize {
        self.subgroups.iter().map(|s| s.lines.len()).sum()
    }
}
