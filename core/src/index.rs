//! Inverted index from word to per-document term frequency.

use crate::{DocId, Result, SearchError};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Term frequencies of one word, keyed by document id.
pub type Postings = BTreeMap<DocId, f64>;

#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    word_to_document_freqs: HashMap<String, Postings>,
    document_ids: BTreeSet<DocId>,
    document_count: usize,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Index a document from its stop-word-filtered words.
    ///
    /// Each occurrence weighs `1 / words.len()`, so a word's term frequency is
    /// its occurrence count divided by the document length and the frequencies
    /// of one document sum to 1. On error the index is left untouched.
    pub fn add_document(&mut self, id: DocId, words: &[&str]) -> Result<()> {
        if self.document_ids.contains(&id) {
            return Err(SearchError::DuplicateDocumentId { id });
        }
        if words.is_empty() {
            return Err(SearchError::EmptyDocument { id });
        }

        let occurrence_weight = 1.0 / words.len() as f64;
        for &word in words {
            *self
                .word_to_document_freqs
                .entry(word.to_string())
                .or_default()
                .entry(id)
                .or_insert(0.0) += occurrence_weight;
        }
        self.document_ids.insert(id);
        self.document_count += 1;
        Ok(())
    }

    pub fn document_count(&self) -> usize { self.document_count }

    /// Number of distinct words in the index.
    pub fn vocabulary_size(&self) -> usize { self.word_to_document_freqs.len() }

    pub fn contains_document(&self, id: DocId) -> bool { self.document_ids.contains(&id) }

    pub fn postings(&self, word: &str) -> Option<&Postings> {
        self.word_to_document_freqs.get(word)
    }

    /// Number of documents containing `word`; 0 for unknown words.
    pub fn document_frequency(&self, word: &str) -> usize {
        self.postings(word).map_or(0, BTreeMap::len)
    }

    /// `ln(document_count / document_frequency)`, or `None` when `word` is not indexed.
    pub fn inverse_document_frequency(&self, word: &str) -> Option<f64> {
        self.postings(word)
            .map(|postings| (self.document_count as f64 / postings.len() as f64).ln())
    }

    pub fn term_frequency(&self, word: &str, id: DocId) -> Option<f64> {
        self.postings(word)?.get(&id).copied()
    }

    /// All `(word, tf)` pairs recorded for one document, in no particular order.
    pub fn document_term_frequencies(&self, id: DocId) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.word_to_document_freqs
            .iter()
            .filter_map(move |(word, postings)| postings.get(&id).map(|&tf| (word.as_str(), tf)))
    }
}
