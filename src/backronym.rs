//! Bounded randomized backronym search
//!
//! Tries to mutate a seed word into a plausible word whose letters can be
//! read as an acronym of the description. The search never fails: running
//! out of attempts is reported through the result record.

use crate::classify::looks_like_word;
use crate::oracle::Dictionary;
use crate::techniques::tables::is_stop_word;
use crate::techniques::{make_misspelling, make_portmanteau_split, suffixify};
use crate::types::{BackronymConfig, BackronymResult};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Randomized search for a backronym of `description` grown out of a seed
/// word. Configure with the builder methods, then drive with [`run`].
///
/// [`run`]: BackronymSearch::run
pub struct BackronymSearch {
    word: String,
    description: String,
    config: BackronymConfig,
    dictionary: Option<Box<dyn Dictionary>>,
}

impl BackronymSearch {
    pub fn new(word: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            description: description.into(),
            config: BackronymConfig::default(),
            dictionary: None,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.config.max_attempts = max_attempts;
        self
    }

    pub fn with_dictionary(mut self, dictionary: impl Dictionary + 'static) -> Self {
        self.dictionary = Some(Box::new(dictionary));
        self
    }

    /// Run the search. Terminates after the first accepted candidate or
    /// once the attempt budget is spent, whichever comes first.
    pub fn run(&self, rng: &mut impl Rng) -> BackronymResult {
        let words: Vec<String> = self
            .description
            .split_whitespace()
            .filter(|w| !is_stop_word(w))
            .map(str::to_string)
            .collect();
        let acronym: String = words
            .iter()
            .filter_map(|w| w.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        let target = acronym.to_ascii_lowercase();

        let mut attempts_used = 0usize;
        let mut successes = 0usize;
        let mut found = None;
        while attempts_used < self.config.max_attempts {
            attempts_used += 1;
            let candidate = self.generate(&words, rng);
            if let Some(candidate) = candidate {
                if self.accepts(&candidate, &target) {
                    debug!(attempt = attempts_used, %candidate, "backronym accepted");
                    successes += 1;
                    found = Some(candidate);
                    break;
                }
            }
        }
        debug!(attempts_used, success = found.is_some(), "search finished");

        let success_ratio = if attempts_used == 0 {
            0.0
        } else {
            successes as f64 / attempts_used as f64
        };
        BackronymResult {
            acronym,
            success: found.is_some(),
            backronym: found,
            words,
            success_ratio,
        }
    }

    /// One randomized mutation of the seed word.
    fn generate(&self, words: &[String], rng: &mut impl Rng) -> Option<String> {
        let seed = std::slice::from_ref(&self.word);
        let candidates = match rng.gen_range(0..3) {
            0 => make_misspelling(seed),
            1 => suffixify(seed),
            _ => match words.choose(rng) {
                Some(partner) => {
                    make_portmanteau_split(&[self.word.clone(), partner.to_ascii_lowercase()])
                }
                None => Vec::new(),
            },
        };
        candidates.choose(rng).cloned()
    }

    fn accepts(&self, candidate: &str, target: &str) -> bool {
        contains_subsequence(&candidate.to_ascii_lowercase(), target)
            && looks_like_word(candidate)
            && self
                .dictionary
                .as_ref()
                .map_or(true, |dict| dict.contains(candidate))
    }
}

/// Whether `needle`'s characters appear in `haystack` in order, not
/// necessarily contiguously.
fn contains_subsequence(haystack: &str, needle: &str) -> bool {
    let mut chars = haystack.chars();
    needle.chars().all(|n| chars.any(|h| h == n))
}

/// Convenience form of [`BackronymSearch`] with an explicit attempt budget.
pub fn backronym(
    word: &str,
    description: &str,
    max_attempts: usize,
    rng: &mut impl Rng,
) -> BackronymResult {
    BackronymSearch::new(word, description)
        .with_max_attempts(max_attempts)
        .run(rng)
}
