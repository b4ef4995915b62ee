// Tokenizer/normalizer for word-derived features.
//
// Punctuation is deleted outright rather than replaced by a space, so
// "don't" becomes "dont" and "end." becomes "end" with nothing left over.
// Word boundaries come only from the whitespace already in the text.

/// Characters stripped from text before word splitting.
const STRIP_CHARS: &[char] = &['.', ',', '?', '"', '\'', '!', ';', ':'];

/// Lowercase `text`, delete all punctuation in [`STRIP_CHARS`], and split on
/// whitespace runs. Empty input yields an empty Vec; any string is valid.
pub fn clean_text(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .filter(|c| !STRIP_CHARS.contains(c))
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_lowercases() {
        assert_eq!(clean_text("Hello, World!"), vec!["hello", "world"]);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert_eq!(clean_text(""), Vec::<String>::new());
    }

    #[test]
    fn apostrophes_deleted_not_split() {
        assert_eq!(clean_text("don't stop"), vec!["dont", "stop"]);
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(clean_text("a   b\t\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn no_punctuation_survives() {
        let tokens = clean_text("wait; really? \"yes!\" she: said.");
        for token in &tokens {
            assert!(
                token.chars().all(|c| !super::STRIP_CHARS.contains(&c)),
                "Punctuation leaked into token {token:?}"
            );
        }
    }

    #[test]
    fn punctuation_only_words_vanish() {
        // "..." cleans to nothing, so it contributes no token at all
        assert_eq!(clean_text("well ... ok"), vec!["well", "ok"]);
    }
}
