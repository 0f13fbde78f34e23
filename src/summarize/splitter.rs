//! Deterministic chunk splitting with overlap and natural boundaries

use crate::summarize::types::Chunk;

/// Delimiters tried when looking for a natural cut, strongest first.
/// Sentence-ending punctuation wins over paragraph breaks, which win over
/// weaker separators.
const DELIMITERS: [&str; 6] = ["。", "\n\n", "\n", "、", ".", " "];

/// Split `text` into chunks of at most `max_chunk_size` characters, with
/// `overlap` characters carried over between adjacent chunks so context is
/// not severed at the cut.
///
/// Text that fits in one chunk is returned unmodified as a single part.
/// All positions are character indices; multi-byte text never splits inside
/// a code point.
pub fn split(text: &str, max_chunk_size: usize, overlap: usize) -> Vec<Chunk> {
    debug_assert!(max_chunk_size > 0);
    debug_assert!(overlap < max_chunk_size);

    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chunk_size {
        return vec![Chunk {
            text: text.to_string(),
            part_number: 1,
            total_parts: 1,
        }];
    }

    let mut pieces: Vec<String> = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let end = start + max_chunk_size;

        if end >= chars.len() {
            // The tail, however short, becomes the last chunk.
            pieces.push(chars[start..].iter().collect());
            break;
        }

        let split_pos = find_split_position(&chars, start, end);
        pieces.push(chars[start..split_pos].iter().collect());

        // Rewind by the overlap, but never stall the cursor: an overlap
        // reaching past the boundary-search zone must not move it backwards.
        let next = split_pos.saturating_sub(overlap);
        start = if next > start { next } else { split_pos };
    }

    let total_parts = pieces.len();
    pieces
        .into_iter()
        .enumerate()
        .map(|(i, text)| Chunk {
            text,
            part_number: i + 1,
            total_parts,
        })
        .collect()
}

/// Find a natural cut inside the last 20% of the window `start..end`,
/// preferring the rightmost occurrence of the strongest delimiter.
/// Falls back to a hard cut at `end` when the zone holds no delimiter.
fn find_split_position(chars: &[char], start: usize, end: usize) -> usize {
    let window = end - start;
    let search_start = end - window / 5;
    let segment: String = chars[search_start..end].iter().collect();

    for delimiter in DELIMITERS {
        if let Some(byte_pos) = segment.rfind(delimiter) {
            let char_pos = segment[..byte_pos].chars().count();
            return search_start + char_pos + delimiter.chars().count();
        }
    }

    end
}
