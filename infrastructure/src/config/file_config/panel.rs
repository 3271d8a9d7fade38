//! Panel shape from TOML (`[panel]` section)

use panel_domain::{Model, PanelSettings};
use serde::{Deserialize, Serialize};

/// Raw `[panel]` section.
///
/// Every field is optional; unset fields keep the built-in default (or
/// whatever a higher-priority source provides).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePanelConfig {
    pub agents: Option<usize>,
    pub groups: Option<usize>,
    pub rounds: Option<usize>,
    pub steps: Option<usize>,
    /// Models cycled over the roster
    pub models: Option<Vec<String>>,
    /// Model for subgroup summaries and the final report
    pub summary_model: Option<String>,
    pub history_limit: Option<usize>,
    pub max_concurrency: Option<usize>,
    /// Overrides the shared panelist system prompt
    pub system_prompt: Option<String>,
}

impl FilePanelConfig {
    /// Build settings from this section on top of the defaults.
    pub fn to_settings(&self) -> PanelSettings {
        let mut settings = PanelSettings::default();
        self.apply_to(&mut settings);
        settings
    }

    /// Overwrite the fields of `settings` that this section sets.
    pub fn apply_to(&self, settings: &mut PanelSettings) {
        if let Some(agents) = self.agents {
            settings.agents = agents;
        }
        if let Some(groups) = self.groups {
            settings.groups = groups;
        }
        if let Some(rounds) = self.rounds {
            settings.rounds = rounds;
        }
        if let Some(steps) = self.steps {
            settings.steps = steps;
        }
        if let Some(models) = &self.models {
            settings.models = models
                .iter()
                .map(|m| m.trim())
                .filter(|m| !m.is_empty())
                .map(Model::from)
                .collect();
        }
        if let Some(model) = &self.summary_model {
            settings.summary_model = Model::from(model.trim());
        }
        if let Some(limit) = self.history_limit {
            settings.history_limit = limit;
        }
        if self.max_concurrency.is_some() {
            settings.max_concurrency = self.max_concurrency;
        }
    }
}
