//! Vigenère polyalphabetic cipher

use crate::cipher::{Direction, TextCipher};
use crate::error::{CipherError, Result};
use crate::utils::{self, ALPHABET_LEN};

/// Vigenère cipher with a validated, letters-only key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    /// Key letters as shift values (A=0 .. Z=25)
    shifts: Vec<usize>,
}

impl Vigenere {
    /// Creates a cipher from a keyword.
    ///
    /// Non-letters are stripped from the keyword; if nothing is left the
    /// key is rejected with [`CipherError::MissingKey`].
    pub fn new(keyword: &str) -> Result<Self> {
        let shifts: Vec<usize> = keyword.chars().filter_map(utils::letter_index).collect();
        if shifts.is_empty() {
            return Err(CipherError::MissingKey);
        }
        Ok(Self { shifts })
    }

    /// The stripped key in uppercase
    pub fn key(&self) -> String {
        self.shifts.iter().map(|&shift| utils::letter_at(shift, false)).collect()
    }

    /// Runs the cipher over `text`.
    ///
    /// The key position only advances on letters, so spaces and punctuation
    /// neither change nor consume key characters.
    pub fn apply(&self, text: &str, direction: Direction) -> String {
        let mut result = String::with_capacity(text.len());
        let mut key_index: usize = 0;

        for c in text.chars() {
            if c.is_ascii_alphabetic() {
                let shift = self.shifts[key_index % self.shifts.len()];
                let offset = match direction {
                    Direction::Encrypt => shift,
                    Direction::Decrypt => ALPHABET_LEN - shift,
                };
                result.push(utils::shift_letter(c, offset));
                key_index += 1;
            } else {
                result.push(c);
            }
        }

        result
    }
}

impl TextCipher for Vigenere {
    fn encrypt(&self, text: &str) -> String {
        self.apply(text, Direction::Encrypt)
    }

    fn decrypt(&self, text: &str) -> String {
        self.apply(text, Direction::Decrypt)
    }
}

/// Encrypts or decrypts `text` under `keyword` in one call
pub fn apply(text: &str, keyword: &str, direction: Direction) -> Result<String> {
    Ok(Vigenere::new(keyword)?.apply(text, direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_known_vector() {
        let cipher = Vigenere::new("LEMON").unwrap();
        assert_eq!(cipher.encrypt("ATTACKATDAWN"), "LXFOPVEFRNHR");
    }

    #[test]
    fn test_decrypt() {
        let ciphertext = "RIJVS";
        assert_eq!(apply(ciphertext, "KEY", Direction::Decrypt).unwrap(), "HELLO");
    }

    #[test]
    fn test_non_letters_do_not_consume_key() {
        let cipher = Vigenere::new("lemon").unwrap();
        assert_eq!(cipher.encrypt("Attack at dawn!"), "Lxfopv ef rnhr!");
        assert_eq!(cipher.decrypt("Lxfopv ef rnhr!"), "Attack at dawn!");
    }

    #[test]
    fn test_key_is_stripped() {
        let cipher = Vigenere::new("le-mo n1").unwrap();
        assert_eq!(cipher.key(), "LEMON");
        assert_eq!(cipher, Vigenere::new("LEMON").unwrap());
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(Vigenere::new(""), Err(CipherError::MissingKey));
        assert_eq!(Vigenere::new("1234 !"), Err(CipherError::MissingKey));
        assert_eq!(apply("text", "", Direction::Encrypt), Err(CipherError::MissingKey));
    }

    #[test]
    fn test_key_of_a_is_identity() {
        let cipher = Vigenere::new("AAA").unwrap();
        assert_eq!(cipher.encrypt("Unchanged text."), "Unchanged text.");
    }
}
