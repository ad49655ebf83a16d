//! Lexical transformation technique library
//!
//! Each technique is a pure function from seed words to candidate names.
//! Non-random techniques are deterministic and order-stable; randomized
//! variants take an injected `Rng`.

pub mod affix;
pub mod blend;
pub mod compound;
pub mod rearrange;
pub mod surface;
pub mod tables;

// Re-export main functionality
pub use affix::{disfixify, duplifixify, infixify, prefixify, simulfixify, suffixify};
pub use blend::{
    make_portmanteau_default_vowel, make_portmanteau_split, make_vowel, reduplication_ablaut,
    reduplication_ablaut_random,
};
pub use compound::{
    acronym_lastname, get_descriptors, make_descriptors, make_founder_product_name,
    make_name_abbreviation, make_name_alliteration,
};
pub use rearrange::{forkerism, kniferism, spoonerism};
pub use surface::{
    all_prefix_first_vowel, domainify, make_misspelling, make_punctuator, make_vowelify,
    palindrome, palindromes, pig_latinize, slice_ends,
};
