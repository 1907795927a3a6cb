//! Splits raw text into words on the space character.

/// Split `text` into its space-delimited words, in order.
///
/// Only `' '` separates words; tabs and newlines stay part of a word. Runs of
/// spaces never produce empty words.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}
