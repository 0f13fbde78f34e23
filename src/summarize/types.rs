//! Data types produced by the summarization pipeline

use serde::{Deserialize, Serialize};

/// One bounded, possibly overlapping slice of the source transcript.
///
/// Lengths and positions are measured in characters, not bytes, so
/// multi-byte text never splits inside a code point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
    /// 1-based position of this chunk.
    pub part_number: usize,
    pub total_parts: usize,
}

/// One extracted highlight, optionally anchored to a transcript timestamp.
///
/// `start_seconds` is only populated on the single-call path, where the
/// model can see the literal `[seconds]` markers; merged partial summaries
/// lose absolute timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPoint {
    pub text: String,
    pub start_seconds: Option<u32>,
}

impl KeyPoint {
    pub fn new(text: impl Into<String>, start_seconds: Option<u32>) -> Self {
        Self {
            text: text.into(),
            start_seconds,
        }
    }
}

/// Structured summary of one transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub title: String,
    pub summary: String,
    pub key_points: Vec<KeyPoint>,
    pub topics: Vec<String>,
    /// Number of chunks the transcript was split into (1 = single-call path).
    pub chunk_count: usize,
}
