//! Monoalphabetic substitution engine

use crate::alphabet::AlphabetMapping;
use crate::cipher::{Direction, TextCipher};

/// Substitutes every ASCII letter of `text` through `mapping`.
///
/// Letters keep their case, everything else is copied unchanged, so the
/// output has exactly as many chars as the input.
pub fn apply(text: &str, mapping: &AlphabetMapping, direction: Direction) -> String {
    text.chars()
        .map(|c| match direction {
            Direction::Encrypt => mapping.encrypt_letter(c),
            Direction::Decrypt => mapping.decrypt_letter(c),
        })
        .collect()
}

impl TextCipher for AlphabetMapping {
    fn encrypt(&self, text: &str) -> String {
        apply(text, self, Direction::Encrypt)
    }

    fn decrypt(&self, text: &str) -> String {
        apply(text, self, Direction::Decrypt)
    }
}
