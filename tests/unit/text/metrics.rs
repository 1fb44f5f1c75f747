use super::*;

// Deterministic stand-in measurer: every character is 10px wide.
fn char_width(s: &str) -> f64 {
    (s.chars().count() as f64) * 10.0
}

#[test]
fn empty_input_yields_one_empty_line() {
    assert_eq!(wrap_words(char_width, "", 100.0), vec![String::new()]);
    assert_eq!(wrap_words(char_width, "   ", 100.0), vec![String::new()]);
}

#[test]
fn short_text_stays_on_one_line() {
    assert_eq!(wrap_words(char_width, "ab cd", 100.0), vec!["ab cd"]);
}

#[test]
fn words_accumulate_greedily() {
    // "aa bb" is 50px, adding " cc" makes 80px, adding " dd" would be 110px.
    let lines = wrap_words(char_width, "aa bb cc dd", 80.0);
    assert_eq!(lines, vec!["aa bb cc", "dd"]);
}

#[test]
fn oversized_word_occupies_a_line_alone() {
    let lines = wrap_words(char_width, "hi incomprehensibilities yo", 60.0);
    assert_eq!(lines, vec!["hi", "incomprehensibilities", "yo"]);
}

#[test]
fn runs_of_whitespace_collapse_to_single_joins() {
    let lines = wrap_words(char_width, "a \t b\n c", 100.0);
    assert_eq!(lines, vec!["a b c"]);
}

#[test]
fn wrap_is_deterministic() {
    let a = wrap_words(char_width, "one two three four five", 90.0);
    let b = wrap_words(char_width, "one two three four five", 90.0);
    assert_eq!(a, b);
}

#[test]
fn every_emitted_line_fits_unless_single_word() {
    let text = "the quick brown fox jumps over the lazy dog";
    let max = 110.0;
    for line in wrap_words(char_width, text, max) {
        let fits = char_width(&line) <= max;
        let single_word = !line.contains(' ');
        assert!(fits || single_word, "line '{line}' breaks the fit law");
    }
}
