//! Summarization pipeline orchestration

use tracing::info;

use crate::config::Settings;
use crate::llm::{build_provider, CompletionProvider};
use crate::summarize::parser::parse_summary_response;
use crate::summarize::prompts;
use crate::summarize::splitter::split;
use crate::summarize::types::{Chunk, SummaryResult};
use crate::{RecapError, Result};

/// Title hint used when the caller has none.
const MISSING_TITLE_HINT: &str = "(not available)";

/// Drives the summarization pipeline: short transcripts go through one
/// completion call, long ones through sequential per-chunk summaries and a
/// final merge. Holds no per-request state; safe to share across calls.
pub struct SummarizerService {
    provider: Box<dyn CompletionProvider>,
    chunk_size: usize,
    chunk_overlap: usize,
}

impl SummarizerService {
    pub fn new(provider: Box<dyn CompletionProvider>, chunk_size: usize, chunk_overlap: usize) -> Self {
        debug_assert!(chunk_overlap < chunk_size);
        Self {
            provider,
            chunk_size,
            chunk_overlap,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(
            build_provider(settings)?,
            settings.summarizer.chunk_size,
            settings.summarizer.chunk_overlap,
        ))
    }

    /// Summarize a transcript into a structured result.
    ///
    /// Fails with `EmptyInput` before any network call if the trimmed
    /// transcript is empty; completion failures abort the whole call.
    pub async fn summarize(
        &self,
        transcript: &str,
        video_title: Option<&str>,
    ) -> Result<SummaryResult> {
        let transcript = transcript.trim();
        if transcript.is_empty() {
            return Err(RecapError::EmptyInput);
        }

        let title_hint = video_title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(MISSING_TITLE_HINT);

        let chunks = split(transcript, self.chunk_size, self.chunk_overlap);

        if chunks.len() == 1 {
            info!("Short transcript: summarizing in a single call");
            self.summarize_short(transcript, title_hint).await
        } else {
            info!("Long transcript: summarizing {} chunks", chunks.len());
            self.summarize_long(&chunks, title_hint).await
        }
    }

    async fn summarize_short(&self, transcript: &str, title_hint: &str) -> Result<SummaryResult> {
        let prompt = prompts::short_text_prompt(transcript, title_hint);
        let raw = self.provider.complete(&prompt).await?;
        Ok(parse_summary_response(&raw, 1))
    }

    async fn summarize_long(&self, chunks: &[Chunk], title_hint: &str) -> Result<SummaryResult> {
        // Chunks are summarized strictly in order, one upstream call in
        // flight at a time; the merge prompt depends on reading the parts
        // in original document order.
        let mut partial_summaries = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            info!(
                "Summarizing chunk {}/{}",
                chunk.part_number, chunk.total_parts
            );
            let prompt = prompts::chunk_summary_prompt(chunk, title_hint);
            let raw = self.provider.complete(&prompt).await?;
            partial_summaries.push(format!("[Part {}]\n{}", chunk.part_number, raw));
        }

        info!("Merging {} partial summaries", partial_summaries.len());
        let combined = partial_summaries.join("\n\n");
        let prompt = prompts::final_summary_prompt(&combined, title_hint);
        let raw = self.provider.complete(&prompt).await?;
        Ok(parse_summary_response(&raw, chunks.len()))
    }
}
