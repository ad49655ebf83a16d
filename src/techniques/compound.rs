//! Multi-word compounding techniques
//!
//! Founder-style names, alliterative pairs, abbreviations, stop-word
//! filtered acronyms and part-of-speech descriptor pairs.

use crate::oracle::PosTagger;
use crate::techniques::tables::is_stop_word;
use std::collections::BTreeMap;

/// Tags treated as proper nouns by [`make_descriptors`].
const PROPER_NOUN_TAGS: &[&str] = &["NNP", "NNPS"];

/// Build a founder-style name from two founders and a product:
/// `Foo`, `Bar`, `Goods` gives `F & B Goods`.
pub fn make_founder_product_name(first: &str, last: &str, product: &str) -> String {
    let initial = |s: &str| {
        s.chars()
            .next()
            .map(|c| c.to_ascii_uppercase().to_string())
            .unwrap_or_default()
    };
    format!("{} & {} {}", initial(first), initial(last), product)
}

/// Pair every two distinct words sharing a first letter, both orderings,
/// joined by `divider` and sorted lexicographically.
pub fn make_name_alliteration(words: &[String], divider: &str) -> Vec<String> {
    let mut out = Vec::new();
    for (xi, a) in words.iter().enumerate() {
        for b in words.iter().skip(xi + 1) {
            let (Some(fa), Some(fb)) = (a.chars().next(), b.chars().next()) else {
                continue;
            };
            if fa.to_ascii_lowercase() != fb.to_ascii_lowercase() {
                continue;
            }
            out.push(format!("{}{}{}", a, divider, b));
            out.push(format!("{}{}{}", b, divider, a));
        }
    }
    out.sort();
    out
}

/// Concatenate the upper-cased first letters of each word.
pub fn make_name_abbreviation(words: &[String]) -> String {
    words
        .iter()
        .filter_map(|w| w.chars().next())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Acronym of the description's non-stop-words followed by the last name:
/// `Amazingly cool product` + `McDonald` gives `ACP McDonald`.
pub fn acronym_lastname(description: &str, lastname: &str) -> String {
    let acronym: String = description
        .split_whitespace()
        .filter(|w| !is_stop_word(w))
        .filter_map(|w| w.chars().next())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    format!("{} {}", acronym, lastname)
}

/// Group words by the tag assigned by the injected tagger. Tag keys are
/// sorted; insertion order is preserved within each tag.
pub fn get_descriptors(words: &[String], tagger: &impl PosTagger) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (word, tag) in tagger.tag(words) {
        grouped.entry(tag).or_default().push(word);
    }
    grouped
}

/// Pair every proper-noun word with every word under every other tag, in
/// both orders. Traversal is deterministic: nouns in stored order, the
/// other tags in key order.
pub fn make_descriptors(tagged: &BTreeMap<String, Vec<String>>) -> Vec<String> {
    let mut out = Vec::new();
    let nouns = tagged
        .iter()
        .filter(|(tag, _)| PROPER_NOUN_TAGS.contains(&tag.as_str()))
        .flat_map(|(_, words)| words.iter());
    for noun in nouns {
        for (tag, others) in tagged {
            if PROPER_NOUN_TAGS.contains(&tag.as_str()) {
                continue;
            }
            for other in others {
                out.push(format!("{} {}", noun, other));
                out.push(format!("{} {}", other, noun));
            }
        }
    }
    out
}
