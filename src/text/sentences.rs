// Sentence-length extraction.
//
// Works on near-raw text (punctuation still attached to words) so that
// terminal marks can be seen. A sentence ends at any word whose last
// character is '!', '.' or '?'. Trailing words with no terminal mark are
// dropped, never emitted — callers rely on this exact behavior.

/// Return the length in words of each sentence in `text`.
///
/// A word consisting only of a terminal mark still counts as one word
/// toward the sentence it closes.
pub fn sentence_lengths(text: &str) -> Vec<usize> {
    let mut lengths = Vec::new();
    let mut count = 0;

    for word in text.split_whitespace() {
        count += 1;
        if word.ends_with(['!', '.', '?']) {
            lengths.push(count);
            count = 0;
        }
    }

    lengths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_words_per_sentence() {
        assert_eq!(sentence_lengths("One two three. Four five!"), vec![3, 2]);
    }

    #[test]
    fn trailing_unterminated_sentence_is_dropped() {
        assert_eq!(sentence_lengths("One two. Three"), vec![2]);
    }

    #[test]
    fn empty_text_has_no_sentences() {
        assert_eq!(sentence_lengths(""), Vec::<usize>::new());
    }

    #[test]
    fn lone_terminal_mark_counts_as_a_word() {
        // The bare "!" closes a two-word sentence: ["loudly", "!"]
        assert_eq!(sentence_lengths("Stop. loudly !"), vec![1, 2]);
    }

    #[test]
    fn question_marks_terminate() {
        assert_eq!(sentence_lengths("Who is there? Me."), vec![3, 1]);
    }

    #[test]
    fn mid_word_punctuation_does_not_terminate() {
        // Only the last character of a word matters
        assert_eq!(sentence_lengths("e.g. this works."), vec![1, 2]);
    }
}
