use crate::DocId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Recoverable conditions raised while building or configuring a search server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The document has no words left once stop words are removed.
    #[error("document {id} has no indexable words")]
    EmptyDocument { id: DocId },

    /// A document with this id was already indexed.
    #[error("document {id} was already added")]
    DuplicateDocumentId { id: DocId },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
