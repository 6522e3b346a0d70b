//! Line wrapping for entry and tagline text

use crate::font::FontMetrics;
use tracing::trace;

/// Break text into lines that fit within the specified width.
///
/// Explicit newlines are preserved as line breaks. Words wider than the
/// line are split on character boundaries, never inside a multi-byte
/// character.
pub fn wrap(text: &str, max_width: f32, font_size: f32, metrics: &dyn FontMetrics) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    for segment in text.split('\n') {
        wrap_segment(segment, max_width, font_size, metrics, &mut lines);
    }

    trace!("wrapped text into {} lines", lines.len());
    lines
}

fn wrap_segment(
    segment: &str,
    max_width: f32,
    font_size: f32,
    metrics: &dyn FontMetrics,
    out: &mut Vec<String>,
) {
    let words: Vec<&str> = segment.split_whitespace().collect();
    if words.is_empty() {
        out.push(String::new());
        return;
    }

    let space_width = metrics.char_width(' ', font_size);
    let mut line = String::new();
    let mut line_width = 0.0_f32;

    for word in words {
        let word_width = metrics.text_width(word, font_size);

        if word_width > max_width {
            // Flush the current line, then split the oversized word
            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
            }
            let tail = split_long_word(word, max_width, font_size, metrics, out);
            line = tail.to_string();
            line_width = metrics.text_width(tail, font_size);
            continue;
        }

        if !line.is_empty() && line_width + space_width + word_width > max_width {
            out.push(std::mem::take(&mut line));
            line_width = 0.0;
        }

        if !line.is_empty() {
            line.push(' ');
            line_width += space_width;
        }
        line.push_str(word);
        line_width += word_width;
    }

    if !line.is_empty() {
        out.push(line);
    }
}

/// Push full-width chunks of an oversized word and return the remainder.
///
/// Always consumes at least one character per chunk so a glyph wider
/// than the line cannot loop forever.
fn split_long_word<'a>(
    word: &'a str,
    max_width: f32,
    font_size: f32,
    metrics: &dyn FontMetrics,
    out: &mut Vec<String>,
) -> &'a str {
    let mut rest = word;
    loop {
        let mut split = 0;
        let mut width = 0.0_f32;
        for (idx, ch) in rest.char_indices() {
            let w = metrics.char_width(ch, font_size);
            if split > 0 && width + w > max_width {
                break;
            }
            width += w;
            split = idx + ch.len_utf8();
        }
        if split >= rest.len() {
            return rest;
        }
        let (chunk, tail) = rest.split_at(split);
        out.push(chunk.to_string());
        rest = tail;
    }
}
