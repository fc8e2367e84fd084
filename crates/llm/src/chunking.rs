/// Text chunk
#[derive(Debug, Clone)]
pub struct TextChunk {
    /// Chunk text
    pub text: String,

    /// Start byte offset in original text
    pub start: usize,

    /// End byte offset in original text
    pub end: usize,
}

/// Sentence endings, English and CJK
const SENTENCE_ENDINGS: [&str; 9] = [". ", ".\n", "! ", "!\n", "? ", "?\n", "。", "！", "？"];

/// Split text into chunks of at most `max_chars` characters
///
/// Chunks end on a sentence boundary when one exists in the last 20% of the
/// window, and consecutive chunks share up to `overlap_chars` characters.
/// Offsets always fall on char boundaries.
pub fn chunk_text(text: &str, max_chars: usize, overlap_chars: usize) -> Vec<TextChunk> {
    // Byte offset of every char, plus the end of the text
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let total_chars = offsets.len() - 1;

    if max_chars == 0 || total_chars <= max_chars {
        return vec![TextChunk {
            text: text.to_string(),
            start: 0,
            end: text.len(),
        }];
    }

    let overlap = overlap_chars.min(max_chars / 2);
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < total_chars {
        let ideal_end = (start + max_chars).min(total_chars);
        let end = if ideal_end < total_chars {
            find_break_point(text, &offsets, start, ideal_end)
        } else {
            ideal_end
        };

        chunks.push(TextChunk {
            text: text[offsets[start]..offsets[end]].to_string(),
            start: offsets[start],
            end: offsets[end],
        });

        if end >= total_chars {
            break;
        }

        // Next chunk with overlap; always moves forward
        let next = end.saturating_sub(overlap);
        start = if next > start { next } else { end };
    }

    chunks
}

/// Char index just after the last sentence ending in the last 20% of the window
fn find_break_point(text: &str, offsets: &[usize], start: usize, ideal_end: usize) -> usize {
    let search_start = start + ((ideal_end - start) * 80 / 100);
    let window = &text[offsets[search_start]..offsets[ideal_end]];

    let best_byte = SENTENCE_ENDINGS
        .iter()
        .filter_map(|ending| {
            window
                .rfind(ending)
                .map(|idx| offsets[search_start] + idx + ending.len())
        })
        .max();

    match best_byte {
        Some(byte) => offsets.partition_point(|&o| o < byte),
        None => ideal_end,
    }
}
