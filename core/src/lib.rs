//! In-memory TF-IDF search over a fixed corpus of short documents.
//!
//! Documents are added to a [`SearchServerBuilder`] during the build phase.
//! [`SearchServerBuilder::seal`] turns it into a read-only [`SearchServer`]
//! that answers queries with plus and minus terms.

pub mod corpus;
pub mod error;
pub mod index;
pub mod query;
pub mod ranker;
pub mod server;
pub mod stop_words;
pub mod tokenizer;

use serde::Serialize;

pub use corpus::Corpus;
pub use error::{Result, SearchError};
pub use index::InvertedIndex;
pub use query::Query;
pub use server::{SearchConfig, SearchServer, SearchServerBuilder};
pub use stop_words::StopWords;

pub type DocId = u32;

/// Default number of documents returned by a top-k search.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// A ranked search hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Document {
    pub id: DocId,
    pub relevance: f64,
}
