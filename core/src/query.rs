//! Query parsing into required (plus) and excluded (minus) words.

use crate::stop_words::StopWords;
use std::collections::BTreeSet;

/// Prefix marking a word whose documents are excluded from results.
pub const MINUS_MARKER: char = '-';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

impl Query {
    /// Parse a raw query.
    ///
    /// Stop words are removed before markers are looked at. A minus word has
    /// exactly one leading marker stripped; it is dropped when what remains is
    /// a stop word or empty. A word may end up in both sets, in which case the
    /// exclusion wins at ranking time.
    pub fn parse(raw_query: &str, stop_words: &StopWords) -> Self {
        let mut query = Query::default();
        for word in stop_words.filter(raw_query) {
            match word.strip_prefix(MINUS_MARKER) {
                Some(stripped) => {
                    if stripped.is_empty() || stop_words.contains(stripped) {
                        continue;
                    }
                    query.minus_words.insert(stripped.to_string());
                }
                None => {
                    query.plus_words.insert(word.to_string());
                }
            }
        }
        query
    }

    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(text: &str) -> StopWords {
        let mut stop_words = StopWords::new();
        stop_words.extend_from_text(text);
        stop_words
    }

    fn words(set: &BTreeSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn splits_plus_and_minus_words() {
        let query = Query::parse("fluffy -collar cat", &StopWords::new());
        assert_eq!(words(&query.plus_words), vec!["cat", "fluffy"]);
        assert_eq!(words(&query.minus_words), vec!["collar"]);
    }

    #[test]
    fn duplicates_collapse() {
        let query = Query::parse("cat cat -dog -dog", &StopWords::new());
        assert_eq!(query.plus_words.len(), 1);
        assert_eq!(query.minus_words.len(), 1);
    }

    #[test]
    fn stop_words_are_removed_from_both_sets() {
        let query = Query::parse("the cat -and -dog", &stop("the and"));
        assert_eq!(words(&query.plus_words), vec!["cat"]);
        assert_eq!(words(&query.minus_words), vec!["dog"]);
    }

    #[test]
    fn prefixed_stop_word_token_is_itself_filtered() {
        let query = Query::parse("-the cat", &stop("-the"));
        assert_eq!(words(&query.plus_words), vec!["cat"]);
        assert!(query.minus_words.is_empty());
    }

    #[test]
    fn bare_marker_is_dropped() {
        let query = Query::parse("cat - dog", &StopWords::new());
        assert_eq!(words(&query.plus_words), vec!["cat", "dog"]);
        assert!(query.minus_words.is_empty());
    }

    #[test]
    fn only_one_marker_is_stripped() {
        let query = Query::parse("--cat", &StopWords::new());
        assert_eq!(words(&query.minus_words), vec!["-cat"]);
    }

    #[test]
    fn word_may_be_both_plus_and_minus() {
        let query = Query::parse("cat -cat", &StopWords::new());
        assert!(query.plus_words.contains("cat"));
        assert!(query.minus_words.contains("cat"));
    }

    #[test]
    fn blank_query_is_empty() {
        assert!(Query::parse("   ", &StopWords::new()).is_empty());
        assert!(Query::parse("the -the", &stop("the")).is_empty());
    }
}
