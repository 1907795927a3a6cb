//! Line-oriented corpus input shared by the console and HTTP front ends.
//!
//! Layout: a stop-word line, a document count, that many document lines, then
//! zero or more query lines.

use crate::server::{SearchConfig, SearchServer, SearchServerBuilder};
use crate::DocId;
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pub stop_words: String,
    /// Document `i` is indexed under id `i`.
    pub documents: Vec<String>,
    pub queries: Vec<String>,
}

impl Corpus {
    pub fn read<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        let stop_words = lines.next().transpose()?.unwrap_or_default();

        let count_line = lines.next().transpose()?.context("missing document count line")?;
        let count: usize = count_line
            .trim()
            .parse()
            .with_context(|| format!("invalid document count {count_line:?}"))?;

        let mut documents = Vec::with_capacity(count);
        // Blank lines right after the count are skipped, like a stream skipping whitespace.
        let mut skipping = true;
        while documents.len() < count {
            let Some(line) = lines.next().transpose()? else {
                bail!("expected {count} documents, found {}", documents.len());
            };
            if skipping {
                if line.trim().is_empty() {
                    continue;
                }
                skipping = false;
                documents.push(line.trim_start().to_string());
            } else {
                documents.push(line);
            }
        }

        let mut queries = Vec::new();
        for line in lines {
            let line = line?;
            if !line.trim().is_empty() {
                queries.push(line);
            }
        }

        Ok(Corpus { stop_words, documents, queries })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("opening corpus {}", path.display()))?;
        Self::read(BufReader::new(f))
    }

    /// Index the corpus and seal it. Documents the index rejects are skipped.
    pub fn build(&self, config: SearchConfig) -> Result<SearchServer> {
        let mut builder = SearchServerBuilder::new(config)?;
        builder.set_stop_words(&self.stop_words);
        for (id, text) in self.documents.iter().enumerate() {
            let id = DocId::try_from(id).context("document id overflow")?;
            if let Err(err) = builder.add_document(id, text) {
                tracing::warn!(id, error = %err, "skipping document");
            }
        }
        Ok(builder.seal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_stop_words_documents_and_queries() {
        let input = "a the\n2\ncat dog\nbird\ncat -dog\n\nbird\n";
        let corpus = Corpus::read(Cursor::new(input)).unwrap();
        assert_eq!(corpus.stop_words, "a the");
        assert_eq!(corpus.documents, vec!["cat dog", "bird"]);
        assert_eq!(corpus.queries, vec!["cat -dog", "bird"]);
    }

    #[test]
    fn skips_blank_lines_after_count() {
        let corpus = Corpus::read(Cursor::new("\n 1 \n\n   cat\nq\n")).unwrap();
        assert_eq!(corpus.stop_words, "");
        assert_eq!(corpus.documents, vec!["cat"]);
        assert_eq!(corpus.queries, vec!["q"]);
    }

    #[test]
    fn later_blank_documents_are_kept() {
        let corpus = Corpus::read(Cursor::new("\n2\ncat\n\n")).unwrap();
        assert_eq!(corpus.documents, vec!["cat", ""]);
        assert!(corpus.queries.is_empty());
    }

    #[test]
    fn rejects_bad_count_and_short_input() {
        assert!(Corpus::read(Cursor::new("a\nmany\n")).is_err());
        assert!(Corpus::read(Cursor::new("a\n")).is_err());
        let err = Corpus::read(Cursor::new("a\n3\ncat\ndog\n")).unwrap_err();
        assert_eq!(err.to_string(), "expected 3 documents, found 2");
    }

    #[test]
    fn build_skips_rejected_documents() {
        let corpus = Corpus::read(Cursor::new("the\n3\ncat\nthe\ndog\n")).unwrap();
        let server = corpus.build(SearchConfig::default()).unwrap();
        assert_eq!(server.document_count(), 2);
        let ids: Vec<DocId> = server.find_top_documents("dog").iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![2]);
    }
}
