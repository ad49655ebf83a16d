//! Core types and structures for name-forge

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A tree of generated candidates, grouped by technique or category.
///
/// Leaves hold candidate lists; branches map category names to subtrees.
/// Scrubbing walks the tree and returns a new one of identical shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultTree {
    Candidates(Vec<String>),
    Categories(BTreeMap<String, ResultTree>),
}

impl ResultTree {
    /// Create a leaf from any iterable of candidates.
    pub fn leaf<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Candidates(candidates.into_iter().map(Into::into).collect())
    }

    /// Create an empty branch.
    pub fn branch() -> Self {
        Self::Categories(BTreeMap::new())
    }

    /// Insert a subtree under `name`. No-op on leaves.
    pub fn insert(&mut self, name: impl Into<String>, subtree: ResultTree) {
        if let Self::Categories(map) = self {
            map.insert(name.into(), subtree);
        }
    }

    /// Total number of candidates across all leaves.
    pub fn len(&self) -> usize {
        match self {
            Self::Candidates(c) => c.len(),
            Self::Categories(map) => map.values().map(ResultTree::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten all candidates into one list, depth-first in key order.
    pub fn flatten(&self) -> Vec<String> {
        match self {
            Self::Candidates(c) => c.clone(),
            Self::Categories(map) => map.values().flat_map(ResultTree::flatten).collect(),
        }
    }
}

impl From<Vec<String>> for ResultTree {
    fn from(candidates: Vec<String>) -> Self {
        Self::Candidates(candidates)
    }
}

/// Outcome of a backronym search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackronymResult {
    /// Upper-cased initials of the filtered description words
    pub acronym: String,
    /// The accepted candidate, if the search succeeded
    pub backronym: Option<String>,
    /// Description words the acronym was built from
    pub words: Vec<String>,
    /// Successful attempts divided by attempts actually run
    pub success_ratio: f64,
    pub success: bool,
}

/// Scrubber settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScrubConfig {
    /// Candidates with a run of this many same-class letters are dropped
    pub max_letter_run: usize,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            max_letter_run: crate::classify::DEFAULT_MAX_LETTER_RUN,
        }
    }
}

/// Backronym search settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BackronymConfig {
    /// Hard upper bound on generation attempts
    pub max_attempts: usize,
}

impl Default for BackronymConfig {
    fn default() -> Self {
        Self { max_attempts: 1000 }
    }
}
