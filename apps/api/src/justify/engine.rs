//! Full-justification engine: reflows plain text to exactly 80 columns.
//!
//! The pipeline is: normalize whitespace → split into paragraphs on blank
//! lines → greedily pack each paragraph's words into lines → pad every
//! closed line to exactly [`MAX_WIDTH`] columns → left-align the last line
//! of each paragraph. Words are atomic: justification only ever changes the
//! whitespace between them.
//!
//! Policy choices (both have observed alternatives):
//! - Inter-word spacing is normalized to a minimum of one space; original
//!   space-run widths are not preserved.
//! - Paragraphs are rejoined with one blank line in the output.
//!
//! The function is total: every string input, including empty, whitespace-only
//! and single-word-wider-than-80 inputs, produces a well-defined output.

/// Target column width for justified lines.
pub const MAX_WIDTH: usize = 80;

/// Justifies `text` to exactly [`MAX_WIDTH`] characters per line.
///
/// Every output line is exactly 80 columns except the last line of each
/// paragraph (left-aligned) and lines holding a single word wider than 80
/// columns (passed through unmodified).
pub fn justify(text: &str) -> String {
    // Normalization: tabs become spaces, all line-ending styles become '\n',
    // and surrounding whitespace is trimmed off the document.
    let normalized = text.replace('\t', " ").replace("\r\n", "\n").replace('\r', "\n");
    let normalized = normalized.trim();
    if normalized.is_empty() {
        return String::new();
    }

    let mut paragraphs: Vec<String> = Vec::new();
    for words in split_paragraphs(normalized) {
        if words.is_empty() {
            continue;
        }
        paragraphs.push(pack_paragraph(&words).join("\n"));
    }

    paragraphs.join("\n\n")
}

/// Splits normalized text into paragraphs and extracts each paragraph's words.
///
/// A paragraph boundary is a run of two or more line breaks, possibly with
/// whitespace on the blank lines. Within a paragraph, line breaks are just
/// word separators: the paragraph's lines are one logical flow.
fn split_paragraphs(text: &str) -> Vec<Vec<&str>> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current);
                current = Vec::new();
            }
        } else {
            current.extend(line.split_whitespace());
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}

/// Greedily packs a paragraph's words into lines.
///
/// A line holding words of combined width `chars` with `n` words accepts the
/// next word iff `chars + width(word) + n <= MAX_WIDTH` — the `+ n` term is
/// the one mandatory space in front of every word except the first. A word
/// that does not fit closes the current line (which gets justified) and opens
/// the next. The final line is terminal: joined with single spaces, unpadded.
fn pack_paragraph(words: &[&str]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line_words: Vec<&str> = Vec::new();
    let mut line_chars = 0usize;

    for &word in words {
        let width = word.chars().count();
        if line_chars + width + line_words.len() > MAX_WIDTH && !line_words.is_empty() {
            lines.push(distribute_spaces(&line_words, line_chars));
            line_words.clear();
            line_chars = 0;
        }
        // A word wider than MAX_WIDTH lands here on an empty line and stays
        // alone: distribute_spaces returns it unpadded when it closes.
        line_words.push(word);
        line_chars += width;
    }

    if !line_words.is_empty() {
        lines.push(line_words.join(" "));
    }

    lines
}

/// Pads a closed line out to exactly [`MAX_WIDTH`] columns.
///
/// Spaces beyond the mandatory one per gap are distributed evenly; when they
/// do not divide evenly, the leftmost gaps receive the surplus, one extra
/// space each. A single-word line has no gaps and is returned as-is.
fn distribute_spaces(words: &[&str], char_count: usize) -> String {
    if words.len() <= 1 {
        return words.first().copied().unwrap_or_default().to_string();
    }

    let gaps = words.len() - 1;
    // Packing guarantees char_count + gaps <= MAX_WIDTH for multi-word lines.
    debug_assert!(char_count + gaps <= MAX_WIDTH);
    let total_spaces = MAX_WIDTH - char_count;
    let base = total_spaces / gaps;
    let extra = total_spaces % gaps;

    let mut line = String::with_capacity(MAX_WIDTH);
    for (i, word) in words.iter().enumerate() {
        line.push_str(word);
        if i < gaps {
            let pad = base + usize::from(i < extra);
            line.extend(std::iter::repeat(' ').take(pad));
        }
    }

    line
}
