//! Candidate scrubbing over nested result trees
//!
//! Walks a [`ResultTree`] and cleans every leaf: trims edge noise, drops
//! duplicates and implausible candidates, sorts what remains. The tree
//! shape is preserved and the input is never mutated.

use crate::classify::looks_like_word_with;
use crate::oracle::Dictionary;
use crate::types::{ResultTree, ScrubConfig};
use tracing::debug;

/// Configurable scrubber. Without a dictionary the letter-run heuristic
/// decides what counts as a word; with one, membership decides.
#[derive(Default)]
pub struct Scrubber {
    config: ScrubConfig,
    dictionary: Option<Box<dyn Dictionary>>,
}

impl Scrubber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ScrubConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_dictionary(mut self, dictionary: impl Dictionary + 'static) -> Self {
        self.dictionary = Some(Box::new(dictionary));
        self
    }

    /// Scrub every leaf of the tree, returning a new tree of the same
    /// shape.
    pub fn scrub(&self, tree: &ResultTree) -> ResultTree {
        match tree {
            ResultTree::Candidates(candidates) => {
                ResultTree::Candidates(self.scrub_leaf(candidates))
            }
            ResultTree::Categories(map) => ResultTree::Categories(
                map.iter()
                    .map(|(key, subtree)| (key.clone(), self.scrub(subtree)))
                    .collect(),
            ),
        }
    }

    fn scrub_leaf(&self, candidates: &[String]) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut kept: Vec<String> = candidates
            .iter()
            .map(|c| trim_edge_noise(c))
            .filter(|c| !c.is_empty())
            .filter(|c| seen.insert(c.clone()))
            .filter(|c| self.is_word(c))
            .collect();
        kept.sort();
        debug!(
            total = candidates.len(),
            kept = kept.len(),
            "scrubbed candidate leaf"
        );
        kept
    }

    fn is_word(&self, candidate: &str) -> bool {
        match &self.dictionary {
            Some(dict) => dict.contains(candidate),
            None => looks_like_word_with(candidate, self.config.max_letter_run),
        }
    }
}

/// Trim leading and trailing non-alphanumeric characters.
fn trim_edge_noise(candidate: &str) -> String {
    candidate
        .trim_matches(|c: char| !c.is_ascii_alphanumeric())
        .to_string()
}

/// Scrub a tree with default settings and no dictionary.
pub fn super_scrub(tree: &ResultTree) -> ResultTree {
    Scrubber::new().scrub(tree)
}
