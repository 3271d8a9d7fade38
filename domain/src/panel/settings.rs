//! Panel settings: how many agents, how they are grouped, how long they talk.

use crate::core::error::DomainError;
use crate::core::model::Model;
use crate::agent::entities::DEFAULT_HISTORY_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the discussion topic comes from.
///
/// When both are given, the file content comes first and the text is
/// appended after a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSource {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
}

impl ContextSource {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            file: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.as_deref().is_none_or(str::is_empty) && self.file.is_none()
    }
}

/// Validated shape of one panel run (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSettings {
    /// Total number of agents on the panel
    pub agents: usize,
    /// Number of subgroups the agents are split into
    pub groups: usize,
    /// Discussion rounds (insights are shared between rounds)
    pub rounds: usize,
    /// Turns per subgroup per round
    pub steps: usize,
    /// Models assigned to agents, cycled by roster index
    pub models: Vec<Model>,
    /// Model used for subgroup summaries and the final report
    pub summary_model: Model,
    /// Turn pairs each agent keeps in its history
    pub history_limit: usize,
    /// Upper bound on subgroups talking at the same time (`None` = all)
    pub max_concurrency: Option<usize>,
    /// Discussion context
    pub context: ContextSource,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            agents: 4,
            groups: 2,
            rounds: 3,
            steps: 5,
            models: Model::default_models(),
            summary_model: Model::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            max_concurrency: None,
            context: ContextSource::default(),
        }
    }
}

impl PanelSettings {
    /// Check the settings, returning the first violated rule.
    ///
    /// Rules are checked in a fixed order so the reported message is
    /// deterministic when several are broken at once.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.agents < 2 {
            return Err(DomainError::TooFewAgents);
        }
        if self.groups < 1 {
            return Err(DomainError::TooFewGroups);
        }
        if self.agents % self.groups != 0 {
            return Err(DomainError::UnevenGroups);
        }
        if self.agents / self.groups < 2 {
            return Err(DomainError::GroupTooSmall);
        }
        if self.rounds < 1 {
            return Err(DomainError::TooFewRounds);
        }
        if self.steps < 2 {
            return Err(DomainError::TooFewSteps);
        }
        if self.context.is_empty() {
            return Err(DomainError::MissingContext);
        }
        if self.models.is_empty() {
            return Err(DomainError::NoModels);
        }
        Ok(())
    }

    /// Agents per subgroup.
    pub fn subgroup_size(&self) -> usize {
        self.agents / self.groups.max(1)
    }

    /// Model for the agent at roster `index`, cycling through `models`.
    pub fn model_for(&self, index: usize) -> Model {
        if self.models.is_empty() {
            return Model::default();
        }
        self.models[index % self.models.len()].clone()
    }
}
