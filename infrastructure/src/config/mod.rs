//! Configuration file loading for agent-panel
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `AGENT_PANEL_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./panel.toml` or `./.panel.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/agent-panel/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top of the merged result by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOpenAiConfig, FileOutputConfig, FilePanelConfig,
    FileProvidersConfig,
};
pub use loader::ConfigLoader;
