//! Line-preserving chunk splitter
//!
//! Splits raw document text into bounded-size retrieval units. Lines are
//! never broken mid-line; blank lines are dropped and do not count toward
//! the size budget. Lengths are counted in Unicode scalar values so that
//! Japanese text budgets the same way as ASCII.

/// Default chunk size budget in characters
pub const DEFAULT_MAX_CHARS: usize = 800;

/// Split text into chunks of at most `max_chars` characters.
///
/// Lines accumulate into a buffer; a boundary is forced when adding the
/// next line would push the running length (line chars + 1 separator per
/// line) over `max_chars` and the buffer is non-empty. A single line longer
/// than `max_chars` becomes its own chunk. Empty or all-blank input yields
/// no chunks.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut length = 0usize;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let line_len = line.chars().count();
        if length + line_len + 1 > max_chars && !buffer.is_empty() {
            chunks.push(buffer.join("\n"));
            buffer.clear();
            length = 0;
        }
        buffer.push(line);
        length += line_len + 1;
    }

    if !buffer.is_empty() {
        chunks.push(buffer.join("\n"));
    }

    chunks
}
