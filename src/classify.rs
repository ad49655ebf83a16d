//! Character and string classification helpers
//!
//! Small predicates shared by the technique library, the scrubber and the
//! backronym search: vowel/consonant tests, comparison keys and the
//! letter-run heuristic used to decide whether a candidate reads like a word.

/// Vowel letters. `y` is treated as a consonant throughout.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Default maximum run of same-class letters before a candidate stops
/// looking pronounceable.
pub const DEFAULT_MAX_LETTER_RUN: usize = 4;

/// Check whether a character is a vowel (case-insensitive).
pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch.to_ascii_lowercase())
}

/// Check whether a character is a consonant: alphabetic and not a vowel.
pub fn is_consonant(ch: char) -> bool {
    ch.is_alphabetic() && !is_vowel(ch)
}

/// Reduce a word to a comparison key: alphanumerics only, lower-cased.
pub fn clean(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Byte index of the first vowel in `word`, if any.
pub fn first_vowel_index(word: &str) -> Option<usize> {
    word.char_indices().find(|(_, c)| is_vowel(*c)).map(|(i, _)| i)
}

/// Byte index of the second vowel in `word`, if any.
pub fn second_vowel_index(word: &str) -> Option<usize> {
    word.char_indices()
        .filter(|(_, c)| is_vowel(*c))
        .nth(1)
        .map(|(i, _)| i)
}

/// Longest run of consecutive consonants in `word`.
///
/// Non-letter characters break the run.
pub fn max_consonant_run(word: &str) -> usize {
    max_run(word, is_consonant)
}

/// Longest run of consecutive vowels in `word`.
pub fn max_vowel_run(word: &str) -> usize {
    max_run(word, is_vowel)
}

fn max_run(word: &str, pred: fn(char) -> bool) -> usize {
    let mut best = 0;
    let mut run = 0;
    for ch in word.chars() {
        if pred(ch) {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

/// Heuristic word test with the default letter-run threshold.
pub fn looks_like_word(word: &str) -> bool {
    looks_like_word_with(word, DEFAULT_MAX_LETTER_RUN)
}

/// Heuristic word test: non-empty, contains at least one letter, and has no
/// run of `max_run` or more consecutive consonants or vowels.
pub fn looks_like_word_with(word: &str, max_run: usize) -> bool {
    if word.is_empty() || !word.chars().any(|c| c.is_alphabetic()) {
        return false;
    }
    max_consonant_run(word) < max_run && max_vowel_run(word) < max_run
}
