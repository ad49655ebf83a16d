//! Composing pass that feeds a technique its own output
//!
//! Exactly one extra generation pass. Callers wanting deeper exploration
//! compose `recycle` on its own output.

use crate::error::Result;

/// Apply `technique` to its own first-generation output.
pub fn recycle<F>(words: &[String], technique: F) -> Vec<String>
where
    F: Fn(&[String]) -> Vec<String>,
{
    let first = technique(words);
    technique(&first)
}

/// [`recycle`] for fallible techniques.
pub fn try_recycle<F>(words: &[String], technique: F) -> Result<Vec<String>>
where
    F: Fn(&[String]) -> Result<Vec<String>>,
{
    let first = technique(words)?;
    technique(&first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::techniques::{pig_latinize, spoonerism, suffixify};

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_recycle_pig_latin() {
        let seed = pig_latinize(&words(&["purring", "cats"]), "ay");
        assert_eq!(
            recycle(&seed, |w| pig_latinize(w, "ay")),
            vec!["urringpaywayway", "atscaywayway"]
        );
    }

    #[test]
    fn test_recycle_is_two_passes() {
        let seed = words(&["shop"]);
        let twice = suffixify(&suffixify(&seed));
        assert_eq!(recycle(&seed, |w| suffixify(w)), twice);
    }

    #[test]
    fn test_try_recycle_propagates_errors() {
        // the second pass sees a single candidate and fails arity
        let seed = words(&["flim", "boom"]);
        assert!(try_recycle(&seed, |w| spoonerism(w)).is_err());
    }
}
