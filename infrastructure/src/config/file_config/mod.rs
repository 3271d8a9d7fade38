//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout. Domain types are only
//! produced after [`FileConfig::validate`] has passed.

mod output;
mod panel;
mod providers;

pub use output::FileOutputConfig;
pub use panel::FilePanelConfig;
pub use providers::{FileOpenAiConfig, FileProvidersConfig};

use serde::{Deserialize, Serialize};

/// Structural problems in a config file
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("{field} cannot be 0")]
    ZeroValue { field: &'static str },

    #[error("{field}: model name cannot be empty")]
    EmptyModelName { field: &'static str },

    #[error("panel.models cannot be an empty list")]
    EmptyModelList,

    #[error("providers.openai.base_url cannot be empty")]
    EmptyBaseUrl,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Panel shape
    pub panel: FilePanelConfig,
    /// Backend settings
    pub providers: FileProvidersConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Check the file values, returning every issue found.
    ///
    /// Range rules that depend on several fields together (divisibility,
    /// agents per group) are left to settings validation.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        let panel = &self.panel;

        let counts = [
            ("panel.agents", panel.agents),
            ("panel.groups", panel.groups),
            ("panel.rounds", panel.rounds),
            ("panel.steps", panel.steps),
            ("panel.history_limit", panel.history_limit),
            ("panel.max_concurrency", panel.max_concurrency),
        ];
        for (field, value) in counts {
            if value == Some(0) {
                issues.push(ConfigValidationError::ZeroValue { field });
            }
        }

        if let Some(models) = &panel.models {
            if models.is_empty() {
                issues.push(ConfigValidationError::EmptyModelList);
            } else if models.iter().any(|m| m.trim().is_empty()) {
                issues.push(ConfigValidationError::EmptyModelName {
                    field: "panel.models",
                });
            }
        }
        if panel
            .summary_model
            .as_deref()
            .is_some_and(|m| m.trim().is_empty())
        {
            issues.push(ConfigValidationError::EmptyModelName {
                field: "panel.summary_model",
            });
        }

        let openai = &self.providers.openai;
        if openai.base_url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyBaseUrl);
        }
        if openai.timeout_secs == 0 {
            issues.push(ConfigValidationError::ZeroValue {
                field: "providers.openai.timeout_secs",
            });
        }
        if openai.max_tokens == Some(0) {
            issues.push(ConfigValidationError::ZeroValue {
                field: "providers.openai.max_tokens",
            });
        }

        issues
    }
}
