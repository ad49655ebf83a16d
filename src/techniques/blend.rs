//! Blending techniques
//!
//! Ablaut reduplication, regex-anchored vowel blends and the two
//! portmanteau builders. Portmanteau fan-out walks every ordered pair of
//! distinct input words; output order follows the input order, so callers
//! get deterministic results.

use crate::classify::{first_vowel_index, max_consonant_run, second_vowel_index};
use crate::error::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Echo each word with its first vowel replaced by `vowel`, as in
/// `cat cet`. Words whose first vowel already equals the target produce
/// nothing, since the mutation would be a no-op duplicate.
pub fn reduplication_ablaut(words: &[String], vowel: char) -> Vec<String> {
    let mut out = Vec::new();
    for word in words {
        let Some(i) = first_vowel_index(word) else {
            continue;
        };
        let mutated = format!("{}{}{}", &word[..i], vowel, &word[i + 1..]);
        if &mutated != word {
            out.push(format!("{} {}", word, mutated));
        }
    }
    out
}

/// [`reduplication_ablaut`] with the target vowel drawn per word from the
/// injected source.
pub fn reduplication_ablaut_random(words: &[String], rng: &mut impl Rng) -> Vec<String> {
    let mut out = Vec::new();
    for word in words {
        let vowel = *VOWELS.choose(rng).unwrap_or(&'a');
        out.extend(reduplication_ablaut(std::slice::from_ref(word), vowel));
    }
    out
}

/// Blend each overlapping adjacent pair at the site where `pattern`
/// matches both words: `brad` and `angelina` under `a{1}` give
/// `brangelina`. Pairs where either word fails to match are omitted.
///
/// There is no separate target-vowel argument: the blend site is fully
/// determined by the pattern's match positions, so the vowel lives in the
/// pattern itself (`a{1}`, `e{1}`, ...).
///
/// Requires at least two words; an invalid pattern is a pattern error.
pub fn make_vowel(words: &[String], pattern: &str) -> Result<Vec<String>> {
    if words.len() < 2 {
        return Err(crate::validation_error!(
            "make_vowel requires at least 2 words, got {}",
            words.len()
        ));
    }
    let re = Regex::new(pattern)?;
    let mut out = Vec::new();
    for pair in words.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if let (Some(ma), Some(mb)) = (re.find(a), re.find(b)) {
            out.push(format!("{}{}", &a[..ma.start()], &b[mb.start()..]));
        }
    }
    Ok(out)
}

/// Join ordered pairs of distinct words at a shared vowel: the first
/// word up to its second vowel, the second word from its first vowel,
/// emitted only when those two vowels are the same letter.
pub fn make_portmanteau_default_vowel(words: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for (xi, i) in words.iter().enumerate() {
        for (xj, j) in words.iter().enumerate() {
            if xi == xj {
                continue;
            }
            let (Some(si), Some(fj)) = (second_vowel_index(i), first_vowel_index(j)) else {
                continue;
            };
            if i.as_bytes()[si] != j.as_bytes()[fj] {
                continue;
            }
            out.push(format!("{}{}", &i[..si], &j[fj..]));
        }
    }
    out
}

/// Combinatorial portmanteau fan-out over every ordered pair of distinct
/// words.
///
/// For a pair (i, j), the head is i up to and including its first vowel
/// and the tail is j from its first vowel. Candidates are the head bridged
/// by i's first letter, i cut at its second vowel joined to the tail, the
/// head bridged by i's last letter (when it differs from the first), and
/// the head bridged by each of `t`, `s`, `z`, `x`. Candidates containing
/// three or more consecutive consonants are discarded.
pub fn make_portmanteau_split(words: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for (xi, i) in words.iter().enumerate() {
        for (xj, j) in words.iter().enumerate() {
            if xi == xj {
                continue;
            }
            let (Some(fi), Some(fj)) = (first_vowel_index(i), first_vowel_index(j)) else {
                continue;
            };
            let (Some(first), Some(last)) = (i.chars().next(), i.chars().next_back()) else {
                continue;
            };
            let head = &i[..fi + 1];
            let tail = &j[fj..];

            let mut candidates = Vec::with_capacity(8);
            candidates.push(format!("{}{}{}", head, first, tail));
            let cut = match second_vowel_index(i) {
                Some(si) => &i[..si],
                None => i.as_str(),
            };
            candidates.push(format!("{}{}", cut, tail));
            if last != first {
                candidates.push(format!("{}{}{}", head, last, tail));
            }
            for bridge in ['t', 's', 'z', 'x'] {
                candidates.push(format!("{}{}{}", head, bridge, tail));
            }
            out.extend(candidates.into_iter().filter(|c| max_consonant_run(c) < 3));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reduplication_ablaut_skips_noop_vowel() {
        let input = words(&["cat", "dog"]);
        assert_eq!(reduplication_ablaut(&input, 'a'), vec!["dog dag"]);
        assert_eq!(reduplication_ablaut(&input, 'e'), vec!["cat cet", "dog deg"]);
        assert_eq!(reduplication_ablaut(&input, 'o'), vec!["cat cot"]);
        assert_eq!(reduplication_ablaut(&input, 'u'), vec!["cat cut", "dog dug"]);
    }

    #[test]
    fn test_reduplication_ablaut_random_is_reproducible() {
        let input = words(&["cat", "dog"]);
        let a = reduplication_ablaut_random(&input, &mut StdRng::seed_from_u64(7));
        let b = reduplication_ablaut_random(&input, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_make_vowel_fixtures() {
        assert_eq!(
            make_vowel(&words(&["brad", "angelina"]), "a{1}").unwrap(),
            vec!["brangelina"]
        );
        assert_eq!(
            make_vowel(&words(&["street", "credence"]), "e{1}").unwrap(),
            vec!["stredence"]
        );
        assert_eq!(
            make_vowel(&words(&["stripe", "wild"]), "i{1}").unwrap(),
            vec!["strild"]
        );
        assert_eq!(
            make_vowel(&words(&["strode", "pork"]), "o{1}").unwrap(),
            vec!["strork"]
        );
        assert_eq!(
            make_vowel(&words(&["true", "crude"]), "u{1}").unwrap(),
            vec!["trude"]
        );
    }

    #[test]
    fn test_make_vowel_no_match_is_empty() {
        assert!(make_vowel(&words(&["matching", "not"]), "a{1}")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_make_vowel_errors() {
        assert!(make_vowel(&words(&["alone"]), "a{1}").is_err());
        assert!(make_vowel(&words(&["a", "b"]), "(unclosed").is_err());
    }

    #[test]
    fn test_portmanteau_default_vowel() {
        let input = words(&["sweet", "potato", "nifty", "gadget", "widgets"]);
        assert_eq!(
            make_portmanteau_default_vowel(&input),
            vec!["potadget", "gadgeet", "widgeet"]
        );
    }

    #[test]
    fn test_portmanteau_split_two_words() {
        let expected = [
            "dadool", "dadool", "datool", "dasool", "dazool", "daxool", "cocad",
            "coad", "colad", "cotad", "cosad", "cozad", "coxad",
        ];
        assert_eq!(make_portmanteau_split(&words(&["dad", "cool"])), expected);
    }

    #[test]
    fn test_portmanteau_split_fan_out_counts() {
        assert_eq!(make_portmanteau_split(&words(&["dad", "neat", "cool"])).len(), 40);
        assert_eq!(
            make_portmanteau_split(&words(&["dad", "neat", "cool", "nifty"])).len(),
            58
        );
        assert_eq!(
            make_portmanteau_split(&words(&[
                "dad", "neat", "cool", "nifty", "super", "duper"
            ]))
            .len(),
            166
        );
    }
}
