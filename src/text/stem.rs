// Suffix-stripping stemmer.
//
// A crude heuristic, not a morphological analyzer. The rules are ordered and
// mutually exclusive: only the first matching rule applies. Known quirks are
// deliberate — "doing" is five characters, fails the length guard on the
// "ing" rule, matches nothing later, and comes back unchanged. Persisted
// stem tables depend on this exact rule order.

/// Reduce one normalized word to its approximate root.
///
/// Index arithmetic is over Unicode scalar values, so multi-byte characters
/// count as one position each.
pub fn stem(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();

    if n <= 3 {
        return word.to_string();
    }

    if word.ends_with("ies") {
        return chars[..n - 2].iter().collect();
    }

    if word.ends_with("ing") && n > 5 {
        // Doubled letter before "ing" takes the letter with it: running -> run
        if chars[n - 4] == chars[n - 5] {
            return chars[..n - 4].iter().collect();
        }
        return chars[..n - 3].iter().collect();
    }

    if word.ends_with("er") || word.ends_with("ed") {
        return chars[..n - 2].iter().collect();
    }

    if word.ends_with('y') {
        let mut stem: String = chars[..n - 1].iter().collect();
        stem.push('i');
        return stem;
    }

    if word.ends_with('e') {
        return chars[..n - 1].iter().collect();
    }

    if word.ends_with('s') {
        // "ers" strips as a unit: makers -> mak
        if chars[n - 3] == 'e' && chars[n - 2] == 'r' {
            return chars[..n - 3].iter().collect();
        }
        return chars[..n - 1].iter().collect();
    }

    word.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_unchanged() {
        assert_eq!(stem("cat"), "cat");
        assert_eq!(stem("a"), "a");
        assert_eq!(stem(""), "");
    }

    #[test]
    fn ies_strips_two() {
        assert_eq!(stem("flies"), "fli");
        assert_eq!(stem("parties"), "parti");
    }

    #[test]
    fn ing_with_doubled_letter_strips_four() {
        assert_eq!(stem("running"), "run");
        assert_eq!(stem("swimming"), "swim");
    }

    #[test]
    fn ing_without_doubled_letter_strips_three() {
        assert_eq!(stem("walking"), "walk");
        assert_eq!(stem("reading"), "read");
    }

    #[test]
    fn five_letter_ing_word_falls_through_unchanged() {
        // "doing" fails the length guard and no later rule matches 'g'
        assert_eq!(stem("doing"), "doing");
        assert_eq!(stem("going"), "going");
    }

    #[test]
    fn er_strips_two() {
        assert_eq!(stem("walker"), "walk");
    }

    #[test]
    fn ed_strips_two() {
        assert_eq!(stem("hoped"), "hop");
        assert_eq!(stem("jumped"), "jump");
    }

    #[test]
    fn trailing_y_becomes_i() {
        assert_eq!(stem("happy"), "happi");
        assert_eq!(stem("party"), "parti");
    }

    #[test]
    fn trailing_e_strips_one() {
        assert_eq!(stem("make"), "mak");
    }

    #[test]
    fn plural_s_strips_one() {
        assert_eq!(stem("cats"), "cat");
        // ends "es" but "ke" before the s is not "er", so only the s goes
        assert_eq!(stem("makes"), "make");
    }

    #[test]
    fn ers_strips_three() {
        assert_eq!(stem("makers"), "mak");
        assert_eq!(stem("walkers"), "walk");
    }

    #[test]
    fn rule_order_ies_beats_s() {
        // "ies" matches before the generic "s" rule ever runs
        assert_eq!(stem("cries"), "cri");
    }
}
