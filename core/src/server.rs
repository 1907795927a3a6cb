//! Two-phase search server: a mutable builder that is sealed into a read-only
//! query handle.

use crate::index::InvertedIndex;
use crate::query::Query;
use crate::ranker;
use crate::stop_words::StopWords;
use crate::{DocId, Document, Result, SearchError, MAX_RESULT_DOCUMENT_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Upper bound on documents returned by `find_top_documents`.
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_results: MAX_RESULT_DOCUMENT_COUNT }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(SearchError::InvalidConfig("max_results must be at least 1".into()));
        }
        Ok(())
    }
}

/// Build phase: register stop words, then add documents.
#[derive(Debug, Default)]
pub struct SearchServerBuilder {
    config: SearchConfig,
    stop_words: StopWords,
    index: InvertedIndex,
}

impl SearchServerBuilder {
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, stop_words: StopWords::new(), index: InvertedIndex::new() })
    }

    /// Add every word of `text` to the stop-word set.
    ///
    /// Documents already added are not re-indexed.
    pub fn set_stop_words(&mut self, text: &str) {
        if self.index.document_count() > 0 {
            tracing::warn!(
                documents = self.index.document_count(),
                "stop words changed after documents were added; existing documents keep their words"
            );
        }
        self.stop_words.extend_from_text(text);
    }

    /// Index `text` under the caller-chosen `id`.
    ///
    /// Fails with [`SearchError::EmptyDocument`] when only stop words remain and
    /// with [`SearchError::DuplicateDocumentId`] when `id` is already indexed.
    /// A failed call changes nothing.
    pub fn add_document(&mut self, id: DocId, text: &str) -> Result<()> {
        let words = self.stop_words.filter(text);
        self.index.add_document(id, &words)?;
        tracing::debug!(id, words = words.len(), "indexed document");
        Ok(())
    }

    pub fn document_count(&self) -> usize { self.index.document_count() }

    pub fn stop_words(&self) -> &StopWords { &self.stop_words }

    /// Finish the build phase.
    pub fn seal(self) -> SearchServer {
        tracing::info!(
            documents = self.index.document_count(),
            vocabulary = self.index.vocabulary_size(),
            stop_words = self.stop_words.len(),
            "search index sealed"
        );
        SearchServer { config: self.config, stop_words: self.stop_words, index: self.index }
    }
}

/// Query phase: a read-only index.
#[derive(Debug)]
pub struct SearchServer {
    config: SearchConfig,
    stop_words: StopWords,
    index: InvertedIndex,
}

impl SearchServer {
    pub fn builder() -> SearchServerBuilder { SearchServerBuilder::default() }

    pub fn parse_query(&self, raw_query: &str) -> Query {
        Query::parse(raw_query, &self.stop_words)
    }

    /// Every matching document with its relevance, ordered by id.
    pub fn find_all_documents(&self, query: &Query) -> Vec<Document> {
        ranker::find_all_documents(&self.index, query)
    }

    /// The most relevant documents for `raw_query`, best first, at most
    /// `config.max_results` of them. Equal relevances are ordered by id.
    pub fn find_top_documents(&self, raw_query: &str) -> Vec<Document> {
        let query = self.parse_query(raw_query);
        let top = ranker::find_top_documents(&self.index, &query, self.config.max_results);
        tracing::debug!(
            plus = query.plus_words.len(),
            minus = query.minus_words.len(),
            hits = top.len(),
            "query ranked"
        );
        top
    }

    pub fn document_count(&self) -> usize { self.index.document_count() }

    pub fn document_frequency(&self, word: &str) -> usize { self.index.document_frequency(word) }

    pub fn inverse_document_frequency(&self, word: &str) -> Option<f64> {
        self.index.inverse_document_frequency(word)
    }

    pub fn vocabulary_size(&self) -> usize { self.index.vocabulary_size() }

    pub fn stop_words(&self) -> &StopWords { &self.stop_words }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    pub fn config(&self) -> &SearchConfig { &self.config }
}
