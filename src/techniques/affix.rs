//! Affixation techniques
//!
//! Prefix/suffix cross products from the fixed tables, duplifix echo pairs,
//! and the trigram-driven disfix/infix transforms.

use crate::techniques::tables::{PREFIXES, SIMULFIX_PAIRS, SUFFIXES};
use regex::Regex;
use std::sync::OnceLock;

fn cvc_trigram() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[b-df-hj-np-tv-z][aeiou][b-df-hj-np-tv-z]").unwrap())
}

fn vcv_trigram() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[aeiou][b-df-hj-np-tv-z][aeiou]").unwrap())
}

/// Cross every word with the prefix table, table order within each word.
pub fn prefixify(words: &[String]) -> Vec<String> {
    words
        .iter()
        .flat_map(|w| PREFIXES.iter().map(move |p| format!("{}{}", p, w)))
        .collect()
}

/// Cross every word with the suffix table, table order within each word.
pub fn suffixify(words: &[String]) -> Vec<String> {
    words
        .iter()
        .flat_map(|w| SUFFIXES.iter().map(move |s| format!("{}{}", w, s)))
        .collect()
}

/// Echo each word with its first letter swapped for every other letter of
/// the alphabet: `shop` becomes `shop ahop`, `shop bhop`, and so on. The
/// word's own first letter is skipped so no self-duplicate is produced.
pub fn duplifixify(words: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for word in words {
        let Some(first) = word.chars().next() else {
            continue;
        };
        let rest = &word[first.len_utf8()..];
        for letter in 'a'..='z' {
            if letter == first.to_ascii_lowercase() {
                continue;
            }
            out.push(format!("{} {}{}", word, letter, rest));
        }
    }
    out
}

/// Delete the first consonant-vowel-consonant trigram of each word.
///
/// Words of four characters or fewer, and words without such a trigram,
/// pass through unchanged rather than being dropped.
pub fn disfixify(words: &[String]) -> Vec<String> {
    words
        .iter()
        .map(|w| {
            if w.chars().count() <= 4 {
                return w.clone();
            }
            match cvc_trigram().find(w) {
                Some(m) => format!("{}{}", &w[..m.start()], &w[m.end()..]),
                None => w.clone(),
            }
        })
        .collect()
}

/// Insert `q` plus each vowel after the leading vowel of each word's first
/// vowel-consonant-vowel trigram, five candidates per eligible word.
///
/// Guard-failing words pass through once, unchanged.
pub fn infixify(words: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for word in words {
        let found = if word.chars().count() > 4 {
            vcv_trigram().find(word)
        } else {
            None
        };
        match found {
            Some(m) => {
                let split = m.start() + 1;
                for vowel in ['a', 'e', 'i', 'o', 'u'] {
                    out.push(format!("{}q{}{}", &word[..split], vowel, &word[split..]));
                }
            }
            None => out.push(word.clone()),
        }
    }
    out
}

/// Insert each two-character pair at the midpoint of every word.
///
/// Words shorter than two characters get the pair prepended instead.
/// `pairs` defaults to the fixed table when `None`.
pub fn simulfixify(words: &[String], pairs: Option<&[&str]>) -> Vec<String> {
    let pairs = pairs.unwrap_or(SIMULFIX_PAIRS);
    let mut out = Vec::new();
    for word in words {
        let len = word.chars().count();
        for pair in pairs {
            if len < 2 {
                out.push(format!("{}{}", pair, word));
            } else {
                let mid = word
                    .char_indices()
                    .nth(len / 2)
                    .map(|(i, _)| i)
                    .unwrap_or(word.len());
                out.push(format!("{}{}{}", &word[..mid], pair, &word[mid..]));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_prefixify_table_order() {
        let res = prefixify(&words(&["shop"]));
        assert_eq!(&res[..3], &["ennishop", "epishop", "equishop"]);
        assert_eq!(res.len(), PREFIXES.len());
    }

    #[test]
    fn test_suffixify_table_order() {
        let res = suffixify(&words(&["shop"]));
        assert_eq!(&res[..3], &["shopage", "shopable", "shopible"]);
        assert_eq!(res.len(), SUFFIXES.len());
    }

    #[test]
    fn test_duplifixify() {
        let res = duplifixify(&words(&["shop"]));
        assert_eq!(&res[..3], &["shop ahop", "shop bhop", "shop chop"]);
        assert_eq!(res.len(), 25);
        assert!(!res.contains(&"shop shop".to_string()));
    }

    #[test]
    fn test_disfixify() {
        assert_eq!(
            disfixify(&words(&["propagating", "gigantic"])),
            vec!["pagating", "antic"]
        );
        // short-word and no-trigram guards pass through
        assert_eq!(disfixify(&words(&["shop", "prop"])), vec!["shop", "prop"]);
        assert_eq!(disfixify(&words(&["shp", "prp"])), vec!["shp", "prp"]);
        assert_eq!(disfixify(&words(&["oooaeoa"])), vec!["oooaeoa"]);
    }

    #[test]
    fn test_infixify() {
        let res = infixify(&words(&["sophisticated"]));
        assert_eq!(
            &res[..4],
            &[
                "sophistiqacated",
                "sophistiqecated",
                "sophistiqicated",
                "sophistiqocated"
            ]
        );
        assert_eq!(res.len(), 5);
        assert_eq!(infixify(&words(&["shop", "prop"])), vec!["shop", "prop"]);
        assert_eq!(infixify(&words(&["oooaeoa"])), vec!["oooaeoa"]);
    }

    #[test]
    fn test_simulfixify_defaults() {
        let res = simulfixify(&words(&["shop"]), None);
        assert_eq!(res.len(), SIMULFIX_PAIRS.len());
        for candidate in &res {
            assert_eq!(candidate.len(), "shop".len() + 2);
        }
    }

    #[test]
    fn test_simulfixify_custom_pairs() {
        assert_eq!(
            simulfixify(&words(&["shop"]), Some(&["ab", "ec", "oz"])),
            vec!["shabop", "shecop", "shozop"]
        );
    }

    #[test]
    fn test_simulfixify_short_and_empty_words() {
        assert_eq!(
            simulfixify(&words(&["", ""]), Some(&["ab", "ec"])),
            vec!["ab", "ec", "ab", "ec"]
        );
        assert_eq!(
            simulfixify(&words(&["f", "b", "a"]), Some(&["ab", "ec"])),
            vec!["abf", "ecf", "abb", "ecb", "aba", "eca"]
        );
    }
}
