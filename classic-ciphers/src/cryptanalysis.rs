//! Ciphertext-only attacks: shift brute force and Vigenère key-length estimation

use std::fmt;

use crate::alphabet::AlphabetMapping;
use crate::analysis;
use crate::cipher::Direction;
use crate::error::{CipherError, Result};
use crate::substitution;
use crate::utils::ALPHABET_LEN;

/// Expected Index of Coincidence of English plaintext
pub const ENGLISH_IOC: f64 = 0.067;

/// Fewest letters key-length estimation will work with
pub const MIN_SAMPLE_LETTERS: usize = 20;

/// Longest key length tried
pub const MAX_KEY_LENGTH: usize = 10;

/// Decryption of a ciphertext under one shift
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftCandidate {
    pub shift: u8,
    pub text: String,
}

impl fmt::Display for ShiftCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2}: {}", self.shift, self.text)
    }
}

/// Average column IoC for one trial key length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyLengthCandidate {
    pub key_length: usize,
    pub average_ioc: f64,
    /// `average_ioc / ENGLISH_IOC`; close to 1.0 means English-like columns
    pub normalized_score: f64,
}

impl KeyLengthCandidate {
    fn new(key_length: usize, average_ioc: f64) -> Self {
        Self {
            key_length,
            average_ioc,
            normalized_score: average_ioc / ENGLISH_IOC,
        }
    }
}

/// Decrypts `ciphertext` with every shift from 0 to 25, in that order.
///
/// No ranking is applied; picking the readable line is left to the caller.
pub fn all_shifts(ciphertext: &str) -> Vec<ShiftCandidate> {
    (0..ALPHABET_LEN as u8)
        .map(|shift| ShiftCandidate {
            shift,
            text: substitution::apply(
                ciphertext,
                &AlphabetMapping::shift(shift as i64),
                Direction::Decrypt,
            ),
        })
        .collect()
}

/// Ranks the probable key lengths of a Vigenère ciphertext.
///
/// For every trial length `L` in `1..=min(10, N / 2)` the cleaned text is
/// split into `L` columns and the column IoCs are averaged. Candidates are
/// sorted by normalized score, highest first; equal scores keep the shorter
/// key first. The first candidate is the estimate.
///
/// Fails with [`CipherError::InsufficientSample`] below
/// [`MIN_SAMPLE_LETTERS`] letters.
pub fn estimate_key_length(ciphertext: &str) -> Result<Vec<KeyLengthCandidate>> {
    let clean = analysis::clean_text(ciphertext);
    let letters = clean.len();

    if letters < MIN_SAMPLE_LETTERS {
        tracing::debug!(letters, required = MIN_SAMPLE_LETTERS, "ciphertext too short for key-length estimation");
        return Err(CipherError::InsufficientSample {
            letters,
            required: MIN_SAMPLE_LETTERS,
        });
    }

    let max_length = MAX_KEY_LENGTH.min(letters / 2);
    let mut candidates: Vec<KeyLengthCandidate> = (1..=max_length)
        .map(|key_length| {
            let columns = analysis::split_columns(&clean, key_length);
            let total: f64 = columns.iter().map(|column| analysis::ioc(column)).sum();
            let candidate = KeyLengthCandidate::new(key_length, total / key_length as f64);
            tracing::trace!(
                key_length,
                average_ioc = candidate.average_ioc,
                score = candidate.normalized_score,
                "key length tried"
            );
            candidate
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.normalized_score
            .total_cmp(&a.normalized_score)
            .then(a.key_length.cmp(&b.key_length))
    });

    if let Some(best) = candidates.first() {
        tracing::debug!(key_length = best.key_length, score = best.normalized_score, "estimated key length");
    }

    Ok(candidates)
}
