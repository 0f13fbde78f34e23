//! Summarization pipeline for recap
//!
//! Short transcripts are summarized in a single call; long ones go through
//! chunk splitting, per-chunk summaries (map), and a final merge (reduce).

mod parser;
mod prompts;
mod service;
mod splitter;
mod types;

pub use service::SummarizerService;
pub use splitter::split;
pub use types::{Chunk, KeyPoint, SummaryResult};
