//! Word-safe text splitting for providers with payload limits.

/// Split `text` into chunks of at most `max_len` characters without breaking words.
///
/// Words are separated by single spaces inside a chunk, so runs of whitespace
/// (including newlines) in the input are collapsed. A single word longer than
/// `max_len` becomes its own oversized chunk rather than being cut.
///
/// Returns an empty vector when `text` contains no words. A `max_len` of zero
/// is treated as one.
pub fn split(text: &str, max_len: usize) -> Vec<String> {
    let max_len = max_len.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if len > 0 && len + 1 + word_len > max_len {
            chunks.push(std::mem::take(&mut current));
            len = 0;
        }

        if len > 0 {
            current.push(' ');
            len += 1;
        }
        current.push_str(word);
        len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
