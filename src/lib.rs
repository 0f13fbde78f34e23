//! recap - Structured transcript summarization powered by LLM map-reduce
//!
//! Splits a long transcript into overlapping chunks at natural boundaries,
//! summarizes each chunk, and merges the partial summaries into one
//! structured result (title, synopsis, key points, topics).

pub mod cli;
pub mod config;
pub mod llm;
pub mod summarize;
pub mod transcript;

use thiserror::Error;

/// Main error type for recap
#[derive(Error, Debug)]
pub enum RecapError {
    #[error("Transcript is empty")]
    EmptyInput,

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Completion request failed: {0}")]
    CompletionFailed(#[source] anyhow::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecapError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "recap";
