//! CLI command implementations

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::summarize::SummarizerService;
use crate::transcript::{timestamped_text, TranscriptSegment};

/// Summarize a transcript from a file or stdin, printing JSON to stdout.
pub async fn summarize(
    settings: &Settings,
    input: Option<PathBuf>,
    title: Option<String>,
    segments: bool,
    compact: bool,
) -> Result<()> {
    let raw_input = match &input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript file: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read transcript from stdin")?;
            buffer
        }
    };

    let transcript = if segments {
        let segments: Vec<TranscriptSegment> =
            serde_json::from_str(&raw_input).context("Failed to parse transcript segments")?;
        timestamped_text(&segments)
    } else {
        raw_input
    };

    let service = SummarizerService::from_settings(settings)?;
    let result = service.summarize(&transcript, title.as_deref()).await?;

    let json = if compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{}", json);

    Ok(())
}

/// Configuration management
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
