//! CLI command definitions

use clap::{Parser, ValueEnum};
use panel_domain::{ContextSource, Model, PanelSettings};
use std::path::PathBuf;

/// Output format for panel results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Transcripts, shared insights and the final report
    Full,
    /// Only the final report
    Report,
    /// JSON output
    Json,
}

impl From<OutputFormat> for panel_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => panel_domain::OutputFormat::Full,
            OutputFormat::Report => panel_domain::OutputFormat::Report,
            OutputFormat::Json => panel_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for agent-panel
#[derive(Parser, Debug)]
#[command(name = "agent-panel")]
#[command(author, version, about = "Agent Panel - LLM agents discuss a topic in subgroups and report back")]
#[command(long_about = r#"
Agent Panel splits a set of LLM agents into subgroups that discuss a topic.

Each round has two phases:
1. Discussion: every subgroup runs a round-robin conversation
2. Insight Sharing: each subgroup is summarized and the summary is
   handed to the agents of every other subgroup

After the last round all shared summaries are condensed into a final report.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./panel.toml        Project-level config
3. ~/.config/agent-panel/config.toml   Global config

Example:
  agent-panel -t "Should we rewrite the billing service?"
  agent-panel --agents 6 --groups 3 --models gpt-4o,gpt-4o-mini -f brief.md
"#)]
pub struct Cli {
    /// Number of agents [default: 4]
    #[arg(long, value_name = "N")]
    pub agents: Option<usize>,

    /// Number of subgroups; must divide the number of agents [default: 2]
    #[arg(long, value_name = "G")]
    pub groups: Option<usize>,

    /// Discussion rounds [default: 3]
    #[arg(long, value_name = "R")]
    pub rounds: Option<usize>,

    /// Turns per subgroup per round [default: 5]
    #[arg(long, value_name = "S")]
    pub steps: Option<usize>,

    /// Comma separated models, cycled over the agents [default: gpt-4o-mini]
    #[arg(long, value_name = "MODELS", value_delimiter = ',')]
    pub models: Vec<String>,

    /// Discussion context text
    #[arg(short, long)]
    pub text: Option<String>,

    /// File with discussion context (read before --text)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Model for subgroup summaries and the final report
    #[arg(long, value_name = "MODEL")]
    pub summary_model: Option<String>,

    /// Turn pairs each agent keeps in its history
    #[arg(long, value_name = "N")]
    pub history_limit: Option<usize>,

    /// Maximum number of subgroups talking at the same time
    #[arg(long, value_name = "N")]
    pub max_concurrency: Option<usize>,

    /// Output format [default: report]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append the conversation to a JSONL file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Overwrite `settings` with every flag given on the command line.
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
        let models: Vec<Model> = self
            .models
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .map(Model::from)
            .collect();
        if !models.is_empty() {
            settings.models = models;
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
        settings.context = ContextSource {
            text: self.text.clone(),
            file: self.file.clone(),
        };
    }
}
