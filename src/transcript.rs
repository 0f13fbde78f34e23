//! Transcript segment helpers
//!
//! The pipeline consumes plain text; callers that hold timestamped segments
//! can render them into the `[seconds] text` line format the single-call
//! prompt understands.

use serde::{Deserialize, Serialize};

/// One timed segment of a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    /// Start time in seconds.
    pub start: f64,
    /// Duration in seconds.
    pub duration: f64,
}

/// Render segments as `[seconds] text` lines, one per segment.
/// Start times are truncated to whole seconds.
pub fn timestamped_text(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|seg| format!("[{}] {}", seg.start.max(0.0) as u64, seg.text))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str, start: f64) -> TranscriptSegment {
        TranscriptSegment {
            text: text.to_string(),
            start,
            duration: 2.0,
        }
    }

    #[test]
    fn renders_one_line_per_segment() {
        let segments = vec![segment("Hello world.", 0.0), segment("This is a test.", 5.4)];

        assert_eq!(
            timestamped_text(&segments),
            "[0] Hello world.\n[5] This is a test."
        );
    }

    #[test]
    fn empty_segments_render_empty_text() {
        assert_eq!(timestamped_text(&[]), "");
    }
}
