//! Output configuration from TOML (`[output]` section)

use panel_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Default output format (`full`, `report`, `json`)
    pub format: Option<OutputFormat>,
    /// Colored terminal output
    pub color: bool,
    /// Show progress while the panel runs
    pub show_progress: bool,
    /// JSONL conversation log
    pub log_file: Option<PathBuf>,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            show_progress: true,
            log_file: None,
        }
    }
}
