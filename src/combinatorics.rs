//! Anagram counting.
//!
//! The number of distinct arrangements of a word is the multiset permutation
//! count:
//!
//! ```text
//!        n!
//! ─────────────────
//! k₁! · k₂! · … kₘ!
//! ```
//!
//! where `n` is the word length and each `kᵢ` is how often one distinct letter
//! occurs. Swapping two identical letters yields the same arrangement, so
//! every group of repeats divides out.
//!
//! Factorials outgrow `u64` at `21!`, so everything here is a [`BigUint`].
//! There is no length ceiling other than memory.
//!
//! ```rust
//! use anagramd::combinatorics::count_anagrams;
//!
//! assert_eq!(count_anagrams("aab").unwrap().to_string(), "3");
//! assert!(count_anagrams("a1b").is_err());
//! ```

use std::collections::HashMap;

use num_bigint::BigUint;

/// Why a candidate word was rejected before counting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnagramError {
    #[error("input is empty")]
    Empty,

    /// The first character that is not an ASCII letter, and its byte index.
    #[error("non-alphabetic character {found:?} at index {index}")]
    NonAlphabetic { index: usize, found: char },
}

/// Checks that `input` is non-empty and made only of ASCII letters.
///
/// Offending characters are reported, never filtered out.
pub fn validate(input: &str) -> Result<(), AnagramError> {
    if input.is_empty() {
        return Err(AnagramError::Empty);
    }
    match input.char_indices().find(|(_, c)| !c.is_ascii_alphabetic()) {
        Some((index, found)) => Err(AnagramError::NonAlphabetic { index, found }),
        None => Ok(()),
    }
}

/// Occurrence count of every character in `word`, in one pass.
pub fn letter_frequencies(word: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in word.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// `n!`, with `0! == 1`.
pub fn factorial(n: usize) -> BigUint {
    (1..=n).map(BigUint::from).product()
}

/// Number of distinct anagrams of `input`, case-insensitively.
///
/// Returns [`AnagramError`] for empty or non-alphabetic input; a valid word
/// always has at least one arrangement.
pub fn count_anagrams(input: &str) -> Result<BigUint, AnagramError> {
    validate(input)?;

    let word = input.to_ascii_lowercase();
    let numerator = factorial(word.len());
    let denominator: BigUint = letter_frequencies(&word)
        .into_values()
        .map(factorial)
        .product();

    debug_assert_eq!(&numerator % &denominator, BigUint::default());
    Ok(numerator / denominator)
}
