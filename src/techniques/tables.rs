//! Fixed lookup tables for the technique library
//!
//! Ordered, read-only data. Output ordering of the affix techniques follows
//! table order, so entries must not be reordered casually.

/// Prefixes applied by `prefixify`, in output order.
pub const PREFIXES: &[&str] = &[
    "enni", "epi", "equi", "extra", "geo", "hydro", "hyper", "hypo",
    "inter", "intra", "iso", "macro", "mega", "meta", "micro", "mini",
    "mono", "multi", "neo", "omni", "para", "poly", "post", "pre",
    "pro", "proto", "pseudo", "retro", "semi", "sub", "super", "tele",
    "trans", "tri", "ultra", "uni",
];

/// Suffixes applied by `suffixify`, in output order.
pub const SUFFIXES: &[&str] = &[
    "age", "able", "ible", "acy", "al", "ance", "ence", "dom",
    "er", "or", "ism", "ist", "ity", "ment", "ness", "ship",
    "sion", "tion", "ate", "en", "ify", "ize", "esque", "ful",
    "ic", "ical", "ious", "ous", "ish", "ive", "less", "ly",
    "ster", "ery",
];

/// Default two-character insertions for `simulfixify`.
///
/// Vowel-consonant and consonant-vowel pairs that stay pronounceable when
/// dropped into the middle of a word.
pub const SIMULFIX_PAIRS: &[&str] = &[
    "ab", "ac", "ad", "al", "am", "an", "ar", "as", "at",
    "el", "en", "er", "es", "il", "in", "is", "ol", "on",
    "or", "ul", "un", "ur",
];

/// Phonetic substring substitutions for `make_misspelling`.
///
/// Each entry yields at most one candidate per word (all occurrences
/// replaced at once, substitutions are not stacked).
pub const MISSPELLINGS: &[(&str, &str)] = &[
    ("ics", "ix"),
    ("ph", "f"),
    ("f", "ph"),
    ("ck", "k"),
    ("ch", "k"),
    ("k", "c"),
    ("ee", "y"),
    ("oo", "u"),
    ("o", "aw"),
    ("c", "k"),
    ("w", "wh"),
    ("qu", "kw"),
    ("x", "ks"),
    ("z", "s"),
    ("s", "z"),
];

/// Words excluded from acronym derivation.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "by", "for", "from", "in", "into",
    "of", "on", "or", "the", "to", "with",
];

/// Whether `word` is an acronym stop word (case-insensitive).
pub fn is_stop_word(word: &str) -> bool {
    let lower = word.to_ascii_lowercase();
    STOP_WORDS.contains(&lower.as_str())
}
