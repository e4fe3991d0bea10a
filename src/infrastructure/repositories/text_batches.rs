use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.!?。！？]+\s*)").expect("sentence pattern is valid"));

/// Split text into batches that respect sentence boundaries.
/// Each batch is at most `max_chars` characters.
pub fn split_into_batches(text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut batches = Vec::new();
    let mut current_batch = String::new();
    let mut last_end = 0;

    for mat in SENTENCE_END.find_iter(text) {
        let sentence = &text[last_end..mat.end()];
        last_end = mat.end();
        push_piece(&mut batches, &mut current_batch, sentence, max_chars);
    }

    // Handle remaining text after last sentence boundary
    if last_end < text.len() {
        push_piece(&mut batches, &mut current_batch, &text[last_end..], max_chars);
    }

    if !current_batch.trim().is_empty() {
        batches.push(current_batch.trim().to_string());
    }

    batches
}

fn push_piece(batches: &mut Vec<String>, current_batch: &mut String, piece: &str, max_chars: usize) {
    let piece_len = piece.chars().count();

    // If adding this piece would exceed the limit, save current batch
    if !current_batch.is_empty() && current_batch.chars().count() + piece_len > max_chars {
        if !current_batch.trim().is_empty() {
            batches.push(current_batch.trim().to_string());
        }
        current_batch.clear();
    }

    // A single oversized piece is cut on character boundaries
    if piece_len > max_chars {
        let chars: Vec<char> = piece.chars().collect();
        for chunk in chars.chunks(max_chars) {
            let chunk: String = chunk.iter().collect();
            if !chunk.trim().is_empty() {
                batches.push(chunk.trim().to_string());
            }
        }
    } else {
        current_batch.push_str(piece);
    }
}
