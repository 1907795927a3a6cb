//! TF-IDF ranking of indexed documents against a parsed query.

use crate::index::InvertedIndex;
use crate::query::Query;
use crate::{DocId, Document};
use std::collections::BTreeMap;

/// Score every document matching at least one plus word.
///
/// Relevance is the sum of `tf * idf` over matched plus words. Any document
/// containing a minus word is then removed, whatever its score. Words absent
/// from the index contribute nothing and exclude nothing.
pub fn find_all_documents(index: &InvertedIndex, query: &Query) -> Vec<Document> {
    let mut document_to_relevance: BTreeMap<DocId, f64> = BTreeMap::new();

    for word in &query.plus_words {
        let (Some(postings), Some(idf)) = (index.postings(word), index.inverse_document_frequency(word)) else {
            continue;
        };
        for (&id, &tf) in postings {
            *document_to_relevance.entry(id).or_insert(0.0) += tf * idf;
        }
    }

    for word in &query.minus_words {
        if let Some(postings) = index.postings(word) {
            for id in postings.keys() {
                document_to_relevance.remove(id);
            }
        }
    }

    document_to_relevance
        .into_iter()
        .map(|(id, relevance)| Document { id, relevance })
        .collect()
}

/// Order by descending relevance, breaking ties by ascending id.
pub fn sort_by_relevance(documents: &mut [Document]) {
    documents.sort_by(|lhs, rhs| {
        rhs.relevance
            .total_cmp(&lhs.relevance)
            .then_with(|| lhs.id.cmp(&rhs.id))
    });
}

/// The `max_results` most relevant matches, best first.
pub fn find_top_documents(index: &InvertedIndex, query: &Query, max_results: usize) -> Vec<Document> {
    let mut matched = find_all_documents(index, query);
    sort_by_relevance(&mut matched);
    matched.truncate(max_results);
    matched
}
