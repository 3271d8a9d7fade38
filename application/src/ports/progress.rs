//! Progress notification port
//!
//! Defines the interface for reporting progress during a panel run.

use panel_domain::{AgentId, InsightSummary, Phase};

/// Callback for progress updates during a panel run
///
/// Implementations live in the presentation layer. Subgroups of one round
/// run concurrently, so `on_turn` calls from different subgroups may
/// interleave; calls for one subgroup arrive in turn order.
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts. `round` is 1-based; `total_tasks` is the
    /// number of turns (discussion) or subgroups (insight sharing) expected.
    fn on_phase_start(&self, phase: &Phase, round: usize, total_tasks: usize);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &Phase, round: usize);

    /// Called after every conversation turn
    fn on_turn(&self, _subgroup: usize, _agent: &AgentId, _response: &str) {}

    /// Called when a subgroup summary has been shared
    fn on_insight(&self, _insight: &InsightSummary) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase, _round: usize, _total_tasks: usize) {}
    fn on_phase_complete(&self, _phase: &Phase, _round: usize) {}
}
