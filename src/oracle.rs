//! Pluggable language oracles
//!
//! The crate itself ships no corpus. Callers that want dictionary-backed
//! scrubbing or part-of-speech grouping inject these capabilities at the
//! trait seam; [`WordList`] is the bundled in-memory implementation.

use crate::classify::clean;
use std::collections::HashSet;

/// Membership test against a known-word corpus.
pub trait Dictionary {
    /// Whether `word` is a known word. Implementations should be
    /// insensitive to case and punctuation.
    fn contains(&self, word: &str) -> bool;
}

/// Part-of-speech lookup for descriptor grouping.
///
/// Tags follow the Penn Treebank convention (`NN`, `NNP`, `JJ`, ...).
/// Words the tagger leaves out of the returned pairs are skipped by the
/// grouping step.
pub trait PosTagger {
    fn tag(&self, words: &[String]) -> Vec<(String, String)>;
}

/// A simple in-memory dictionary backed by a hash set of cleaned words.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| clean(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&clean(word))
    }
}

impl<F> PosTagger for F
where
    F: Fn(&[String]) -> Vec<(String, String)>,
{
    fn tag(&self, words: &[String]) -> Vec<(String, String)> {
        self(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_membership() {
        let dict = WordList::new(["gadget", "Widget", "potato"]);
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("gadget"));
        assert!(dict.contains("WIDGET"));
        assert!(dict.contains("potato!"));
        assert!(!dict.contains("frobnicate"));
    }

    #[test]
    fn test_word_list_skips_empty_entries() {
        let dict = WordList::new(["...", "ok"]);
        assert_eq!(dict.len(), 1);
        assert!(!dict.contains(""));
    }

    #[test]
    fn test_closure_tagger() {
        let tagger = |words: &[String]| {
            words
                .iter()
                .filter(|w| w.starts_with(char::is_uppercase))
                .map(|w| (w.clone(), "NNP".to_string()))
                .collect::<Vec<_>>()
        };
        let words = vec!["Smith".to_string(), "smith".to_string()];
        let tagged = tagger.tag(&words);
        assert_eq!(tagged, vec![("Smith".to_string(), "NNP".to_string())]);
    }
}
