//! Prompt templates for the summarization pipeline
//!
//! Three modes: a single-call prompt for short transcripts, a per-chunk
//! bullet prompt for the map phase, and a merge prompt for the reduce phase.
//! The single-call and merge prompts demand strict JSON; the chunk prompt
//! demands plain bullets so partial summaries stay cheap to concatenate.

use crate::summarize::types::Chunk;

/// Single-call prompt over a full transcript with `[seconds]` line markers.
pub fn short_text_prompt(transcript: &str, video_title: &str) -> String {
    format!(
        "You are an expert at summarizing video transcripts.\n\
Video title (for reference): {video_title}\n\
\n\
Below is the full transcript of the video. Each line starts with [seconds]\n\
followed by the text spoken at that time.\n\
\n\
<transcript>\n\
{transcript}\n\
</transcript>\n\
\n\
Produce a summary of the transcript in the following JSON format.\n\
Output only the JSON, with no other text.\n\
\n\
{{\n\
  \"title\": \"A concise title capturing the video's content (at most 20 characters)\",\n\
  \"summary\": \"An overview of the whole video in 3-5 sentences\",\n\
  \"key_points\": [\n\
    {{ \"text\": \"Key point 1\", \"start_seconds\": matching [seconds] integer }},\n\
    {{ \"text\": \"Key point 2\", \"start_seconds\": matching [seconds] integer }}\n\
  ],\n\
  \"topics\": [\"topic 1\", \"topic 2\"]\n\
}}\n\
\n\
Notes:\n\
- Keep the title short and focused on the core of the video\n\
- Write the summary concretely, so someone who has not watched the video \
understands it; avoid vague wording\n\
- Give 3-7 key_points. Each element is {{ \"text\": \"one concise, informative \
sentence\", \"start_seconds\": the [seconds] integer where that point is \
discussed }}. Use null when no matching timestamp exists\n\
- Give 2-5 topics naming the video's subjects, preferring concrete terms from \
the video over abstract ones"
    )
}

/// Map-phase prompt: concrete bullet facts for one chunk, no JSON.
pub fn chunk_summary_prompt(chunk: &Chunk, video_title: &str) -> String {
    format!(
        "You are an expert at summarizing video transcripts.\n\
Video title (for reference): {video_title}\n\
\n\
Below is part {part_number}/{total_parts} of the video's transcript.\n\
\n\
<transcript_chunk>\n\
{chunk_text}\n\
</transcript_chunk>\n\
\n\
Summarize this part as follows:\n\
- Extract the 3-5 main points as bullet lines\n\
- Keep each point to 1-2 concise, concrete sentences; avoid vague wording \
like \"various\" or \"several things\"\n\
- Base every point on facts and statements present in the transcript; do not \
mix in speculation or generalities\n\
- Keep technical terms as they appear\n\
\n\
Output only the bullet list.",
        part_number = chunk.part_number,
        total_parts = chunk.total_parts,
        chunk_text = chunk.text,
    )
}

/// Reduce-phase prompt: merge labeled partial summaries into the final JSON.
/// Absolute timing is not derivable from partial summaries, so every
/// `start_seconds` is forced to null.
pub fn final_summary_prompt(partial_summaries: &str, video_title: &str) -> String {
    format!(
        "You are an expert at summarizing video transcripts.\n\
Video title (for reference): {video_title}\n\
\n\
Below are per-part summaries extracted from the video's full transcript.\n\
\n\
<partial_summaries>\n\
{partial_summaries}\n\
</partial_summaries>\n\
\n\
Combine the partial summaries above into a final summary in the following\n\
JSON format. Output only the JSON, with no other text.\n\
\n\
{{\n\
  \"title\": \"A concise title capturing the video's content (at most 20 characters)\",\n\
  \"summary\": \"An overview of the whole video in 3-5 sentences\",\n\
  \"key_points\": [\n\
    {{ \"text\": \"Key point 1\", \"start_seconds\": null }},\n\
    {{ \"text\": \"Key point 2\", \"start_seconds\": null }}\n\
  ],\n\
  \"topics\": [\"topic 1\", \"topic 2\"]\n\
}}\n\
\n\
Notes:\n\
- Keep the title short and focused on the core of the video\n\
- Write the summary concretely, so someone who has not watched the video \
understands it; avoid vague wording\n\
- Give 3-7 key_points. Each element is {{ \"text\": \"one concise, informative \
sentence\", \"start_seconds\": null }} (timestamps cannot be recovered from \
partial summaries)\n\
- Give 2-5 topics naming the video's subjects, preferring concrete terms from \
the video over abstract ones"
    )
}
