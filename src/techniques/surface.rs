//! Single-word surface transformations
//!
//! Truncation, domain-style joining, palindromes, punctuation variants,
//! misspellings, pig latin and exhaustive consonant prefixing.

use crate::classify::{first_vowel_index, is_consonant};
use crate::techniques::tables::MISSPELLINGS;

/// Remove `count` characters from each end of `word`.
///
/// `None` or zero is the identity; removing more than available yields an
/// empty string rather than failing.
pub fn slice_ends(word: &str, count: Option<usize>) -> String {
    let count = match count {
        None | Some(0) => return word.to_string(),
        Some(c) => c,
    };
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= count * 2 {
        return String::new();
    }
    chars[count..chars.len() - count].iter().collect()
}

/// Join each word with a TLD, trimming a shared suffix first so the result
/// stays short: `intercom` + `.com` becomes `inter.com`.
///
/// An empty TLD passes the words through unchanged.
pub fn domainify(words: &[String], tld: &str) -> Vec<String> {
    let suffix = tld.trim_start_matches('.');
    words
        .iter()
        .map(|w| {
            if suffix.is_empty() {
                return w.clone();
            }
            let root = w.strip_suffix(suffix).unwrap_or(w);
            format!("{}.{}", root, suffix)
        })
        .collect()
}

/// Append the reverse of `word` to itself, case and spaces preserved.
pub fn palindrome(word: &str) -> String {
    let reversed: String = word.chars().rev().collect();
    format!("{}{}", word, reversed)
}

/// Map [`palindrome`] over a sequence.
pub fn palindromes(words: &[String]) -> Vec<String> {
    words.iter().map(|w| palindrome(w)).collect()
}

/// Insert a separator after every occurrence of `letter`, emitting a hyphen
/// variant then a period variant per word containing the letter.
pub fn make_punctuator(words: &[String], letter: char) -> Vec<String> {
    let mut out = Vec::new();
    for word in words {
        if !word.contains(letter) {
            continue;
        }
        for sep in ['-', '.'] {
            let mut variant = String::with_capacity(word.len() + 2);
            for ch in word.chars() {
                variant.push(ch);
                if ch == letter {
                    variant.push(sep);
                }
            }
            out.push(variant);
        }
    }
    out
}

/// Drop the final character of every word longer than one character.
pub fn make_vowelify(words: &[String]) -> Vec<String> {
    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next_back() {
                Some(_) if w.chars().count() > 1 => chars.as_str().to_string(),
                _ => w.clone(),
            }
        })
        .collect()
}

/// Apply the phonetic substitution table, one candidate per entry that
/// changes the word. Substitutions are not stacked.
pub fn make_misspelling(words: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for word in words {
        for (pattern, replacement) in MISSPELLINGS {
            if word.contains(pattern) {
                let variant = word.replace(pattern, replacement);
                if &variant != word {
                    out.push(variant);
                }
            }
        }
    }
    out
}

/// Move each word's leading consonant cluster to the end and append
/// `postfix`. Words with no leading consonants get `w` plus the postfix.
pub fn pig_latinize(words: &[String], postfix: &str) -> Vec<String> {
    words
        .iter()
        .map(|w| match first_vowel_index(w) {
            Some(i) if i > 0 => format!("{}{}{}", &w[i..], &w[..i], postfix),
            _ => format!("{}w{}", w, postfix),
        })
        .collect()
}

/// Prepend every capitalized consonant letter to `word`, in alphabetical
/// order of the prepended letter.
pub fn all_prefix_first_vowel(word: &str) -> Vec<String> {
    ('b'..='z')
        .filter(|c| is_consonant(*c))
        .map(|c| format!("{}{}", c.to_ascii_uppercase(), word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_slice_ends_identity() {
        assert_eq!(slice_ends("shop", None), "shop");
        assert_eq!(slice_ends("shop", Some(0)), "shop");
    }

    #[test]
    fn test_slice_ends_trims_both_sides() {
        assert_eq!(slice_ends("shopping", Some(2)), "oppi");
        assert_eq!(slice_ends("shop", Some(3)), "");
    }

    #[test]
    fn test_domainify() {
        assert_eq!(domainify(&words(&["intercom"]), ".com"), vec!["inter.com"]);
        assert_eq!(domainify(&words(&["actively"]), ".ly"), vec!["active.ly"]);
        assert_eq!(domainify(&words(&["scamp"]), ".camp"), vec!["s.camp"]);
        assert_eq!(domainify(&words(&["intercom"]), ""), vec!["intercom"]);
    }

    #[test]
    fn test_palindrome() {
        assert_eq!(palindrome("f"), "ff");
        assert_eq!(palindrome("rad"), "raddar");
        assert_eq!(palindromes(&words(&["ab", "c"])), vec!["abba", "cc"]);
    }

    #[test]
    fn test_punctuator_variants() {
        assert_eq!(
            make_punctuator(&words(&["delicious"]), 'i'),
            vec!["deli-ci-ous", "deli.ci.ous"]
        );
        assert!(make_punctuator(&words(&["shop"]), 'i').is_empty());
    }

    #[test]
    fn test_vowelify() {
        assert_eq!(
            make_vowelify(&words(&["nautical", "monster"])),
            vec!["nautica", "monste"]
        );
        assert_eq!(make_vowelify(&words(&["f"])), vec!["f"]);
    }

    #[test]
    fn test_misspelling_fixtures() {
        let res = make_misspelling(&words(&["effects", "phonics", "glee", "cron", "chrono"]));
        for expected in ["phonix", "ephphects", "gly", "crawn", "krono"] {
            assert!(res.iter().any(|w| w == expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_pig_latinize() {
        assert_eq!(pig_latinize(&words(&["rad"]), "ay"), vec!["adray"]);
        assert_eq!(pig_latinize(&words(&["rad"]), "ey"), vec!["adrey"]);
        assert_eq!(pig_latinize(&words(&["apple"]), "ay"), vec!["appleway"]);
    }

    #[test]
    fn test_all_prefix_first_vowel() {
        let res = all_prefix_first_vowel("umbrellas");
        assert_eq!(res.len(), 21);
        assert_eq!(res[0], "Bumbrellas");
        assert_eq!(res[res.len() - 1], "Zumbrellas");
        // vowels are never prepended
        assert!(!res.iter().any(|w| w.starts_with('E')));
    }
}
