//! Spoonerism-family rearrangements
//!
//! Each operation walks overlapping adjacent word pairs and swaps a single
//! letter position between them, producing one two-word candidate per pair.
//! All three require at least two input words.

use crate::error::Result;
use crate::validation_error;

fn check_arity(name: &str, words: &[String]) -> Result<()> {
    if words.len() < 2 {
        return Err(validation_error!(
            "{} requires at least 2 words, got {}",
            name,
            words.len()
        ));
    }
    Ok(())
}

fn swap_at(a: &str, b: &str, index_of: fn(&[char]) -> usize) -> Option<String> {
    let ca: Vec<char> = a.chars().collect();
    let cb: Vec<char> = b.chars().collect();
    if ca.is_empty() || cb.is_empty() {
        return None;
    }
    let ia = index_of(&ca);
    let ib = index_of(&cb);
    let mut left = ca.clone();
    let mut right = cb.clone();
    left[ia] = cb[ib];
    right[ib] = ca[ia];
    let left: String = left.into_iter().collect();
    let right: String = right.into_iter().collect();
    Some(format!("{} {}", left, right))
}

/// Swap the first letters of each adjacent pair: `flim boom` becomes
/// `blim foom`.
pub fn spoonerism(words: &[String]) -> Result<Vec<String>> {
    check_arity("spoonerism", words)?;
    Ok(words
        .windows(2)
        .filter_map(|pair| swap_at(&pair[0], &pair[1], |_| 0))
        .collect())
}

/// Swap the middle letters of each adjacent pair.
pub fn kniferism(words: &[String]) -> Result<Vec<String>> {
    check_arity("kniferism", words)?;
    Ok(words
        .windows(2)
        .filter_map(|pair| swap_at(&pair[0], &pair[1], |c| c.len() / 2))
        .collect())
}

/// Swap the last letters of each adjacent pair.
pub fn forkerism(words: &[String]) -> Result<Vec<String>> {
    check_arity("forkerism", words)?;
    Ok(words
        .windows(2)
        .filter_map(|pair| swap_at(&pair[0], &pair[1], |c| c.len() - 1))
        .collect())
}
