//! Panel run phases

use serde::{Deserialize, Serialize};

/// Phase of a panel run
///
/// A run alternates `Discussion` and `InsightSharing` phases and ends with
/// a single `FinalReport` phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Subgroups talk among themselves
    Discussion,
    /// Subgroup summaries are broadcast to the other subgroups
    InsightSharing,
    /// All shared insights are condensed into one report
    FinalReport,
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::Discussion => "discussion",
            Phase::InsightSharing => "insight_sharing",
            Phase::FinalReport => "final_report",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Phase::Discussion => "Discussion",
            Phase::InsightSharing => "Insight Sharing",
            Phase::FinalReport => "Final Report",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
