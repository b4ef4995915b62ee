// Character n-gram extraction.
//
// Produces every overlapping fixed-length character window from lowercased
// text with spaces and punctuation removed. Duplicates are preserved — the
// caller counts them. Only the space character U+0020 is removed, not all
// whitespace; the feature model hands this function newline-stripped text.

/// Characters removed before windowing. The set differs from the word
/// tokenizer's by including '-'.
const STRIP_CHARS: &[char] = &['.', ',', '?', '"', '\'', '!', ';', '-', ':'];

/// Return every contiguous `length`-character window of the cleaned text,
/// in order, duplicates preserved. Fewer than `length` characters after
/// cleanup yields an empty Vec.
pub fn char_ngrams(text: &str, length: usize) -> Vec<String> {
    let cleaned: Vec<char> = text
        .to_lowercase()
        .chars()
        .filter(|c| *c != ' ' && !STRIP_CHARS.contains(c))
        .collect();

    if length == 0 || cleaned.len() < length {
        return Vec::new();
    }

    cleaned
        .windows(length)
        .map(|window| window.iter().collect())
        .collect()
}
