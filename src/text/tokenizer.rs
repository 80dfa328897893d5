// Word tokenizer.
//
// A token is a maximal run of word characters (Unicode alphanumerics plus
// underscore), lowercased. Everything else separates tokens and is dropped.
// No stemming and no stop-word removal.

/// Whether `c` can be part of a token.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split `text` into lowercase word tokens, in order of appearance.
///
/// Empty or separator-only input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    // Lowercase first: case folding can expand a char into several, and the
    // word-char test must see the folded form.
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
