use crate::tokenizer::tokenize;
use std::collections::BTreeSet;

/// Words excluded from both indexing and queries. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    /// Add every word of `text` to the set. Repeated calls only grow it.
    pub fn extend_from_text(&mut self, text: &str) {
        for word in tokenize(text) {
            self.words.insert(word.to_string());
        }
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    /// Tokenize `text` and drop stop words, keeping the original order.
    pub fn filter<'a>(&self, text: &'a str) -> Vec<&'a str> {
        tokenize(text).into_iter().filter(|word| !self.contains(word)).collect()
    }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}
