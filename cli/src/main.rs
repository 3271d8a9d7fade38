//! CLI entrypoint for Agent Panel
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use panel_application::{
    ConversationLogger, NoProgress, ProgressNotifier, RunNetworkInput, RunNetworkUseCase,
};
use panel_domain::{OutputFormat, PanelSettings};
use panel_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, LocalContextLoader, OpenAiGateway,
};
use panel_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // A missing .env is normal
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Could not load .env: {}", e),
    }

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("Failed to load configuration")?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("Configuration error: {}", issue);
        }
        return Ok(ExitCode::FAILURE);
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Settings: defaults < config files < CLI flags ===
    let settings = resolve_settings(&cli, &config);
    if let Err(e) = settings.validate() {
        eprintln!("{}", e);
        return Ok(ExitCode::FAILURE);
    }

    let topic = LocalContextLoader::new().load(&settings.context)?;

    // === Dependency Injection ===
    let gateway = match OpenAiGateway::from_config(&config.providers.openai) {
        Ok(gateway) => Arc::new(gateway),
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };
    debug!(endpoint = gateway.endpoint(), "Gateway ready");

    let mut use_case = RunNetworkUseCase::new(gateway);
    if let Some(path) = cli.log_file.as_ref().or(config.output.log_file.as_ref())
        && let Some(logger) = JsonlConversationLogger::new(path)
    {
        info!("Logging conversation to {}", logger.path().display());
        use_case = use_case.with_conversation_logger(Arc::new(logger) as Arc<dyn ConversationLogger>);
    }

    let mut input = RunNetworkInput::new(topic, settings);
    if let Some(system_prompt) = &config.panel.system_prompt {
        input = input.with_system_prompt(system_prompt.clone());
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    let progress: Box<dyn ProgressNotifier> =
        if cli.quiet || !config.output.show_progress || format == OutputFormat::Json {
            Box::new(NoProgress)
        } else if std::io::stdout().is_terminal() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        };

    let report = use_case
        .execute_with_progress(input, progress.as_ref())
        .await?;

    println!("{}", ConsoleFormatter::render(&report, format));

    Ok(ExitCode::SUCCESS)
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_settings(cli: &Cli, config: &FileConfig) -> PanelSettings {
    let mut settings = config.panel.to_settings();
    cli.apply_to(&mut settings);
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_domain::Model;

    #[test]
    fn test_cli_flags_beat_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = toml_config(
            &dir,
            "[panel]\nagents = 6\ngroups = 3\nmodels = [\"gpt-4o\"]\n",
        );
        let cli = Cli::parse_from(["agent-panel", "--groups", "2", "-t", "X"]);

        let settings = resolve_settings(&cli, &config);

        assert_eq!(settings.agents, 6);
        assert_eq!(settings.groups, 2);
        assert_eq!(settings.models, vec![Model::Gpt4o]);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_context_is_rejected() {
        let cli = Cli::parse_from(["agent-panel"]);
        let settings = resolve_settings(&cli, &FileConfig::default());

        assert_eq!(
            settings.validate().unwrap_err().to_string(),
            "Must provide either text or file for context"
        );
    }

    fn toml_config(dir: &tempfile::TempDir, text: &str) -> FileConfig {
        let path = dir.path().join("panel.toml");
        std::fs::write(&path, text).unwrap();
        ConfigLoader::load_file(&path).unwrap()
    }
}
