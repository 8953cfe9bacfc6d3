//! Rail fence transposition cipher
//!
//! Encryption writes the text along a zigzag over `rails` rows and reads the
//! rows top to bottom. Decryption rebuilds the same zigzag for the ciphertext
//! length, cuts the ciphertext into rows and reads it back along the zigzag.
//!
//! ```text
//! W . . . E . . . C . . . R . .
//! . E . R . D . S . O . E . E .
//! . . A . . . I . . . V . . . D
//! ```

use crate::cipher::{Direction, TextCipher};
use crate::error::{CipherError, Result};

/// Rail fence cipher with at least two rails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailFence {
    rails: usize,
}

impl RailFence {
    pub fn new(rails: usize) -> Result<Self> {
        if rails < 2 {
            return Err(CipherError::InvalidParameter(format!(
                "rail count must be at least 2, got {rails}"
            )));
        }
        Ok(Self { rails })
    }

    pub fn rails(&self) -> usize {
        self.rails
    }

    /// Rails actually touched by a text of `len` characters.
    ///
    /// A text no longer than the rail count never bounces, so extra rails are
    /// empty and the zigzag is the identity.
    fn rails_for(&self, len: usize) -> usize {
        self.rails.min(len.max(1))
    }

    /// Row index of every position along the zigzag
    fn rail_pattern(&self, len: usize) -> Vec<usize> {
        let rails = self.rails_for(len);
        if rails < 2 {
            return vec![0; len];
        }

        let cycle = 2 * (rails - 1);
        (0..len)
            .map(|i| {
                let step = i % cycle;
                if step < rails {
                    step
                } else {
                    cycle - step
                }
            })
            .collect()
    }

    fn encrypt_chars(&self, chars: &[char]) -> String {
        let pattern = self.rail_pattern(chars.len());
        let mut rows: Vec<String> = vec![String::new(); self.rails_for(chars.len())];

        for (&c, &row) in chars.iter().zip(&pattern) {
            rows[row].push(c);
        }

        rows.concat()
    }

    fn decrypt_chars(&self, chars: &[char]) -> String {
        let pattern = self.rail_pattern(chars.len());
        let rails = self.rails_for(chars.len());

        let mut row_lengths = vec![0usize; rails];
        for &row in &pattern {
            row_lengths[row] += 1;
        }

        // Start offset of each row inside the ciphertext
        let mut cursors = Vec::with_capacity(rails);
        let mut offset = 0;
        for length in row_lengths {
            cursors.push(offset);
            offset += length;
        }

        pattern
            .iter()
            .map(|&row| {
                let c = chars[cursors[row]];
                cursors[row] += 1;
                c
            })
            .collect()
    }
}

impl TextCipher for RailFence {
    fn encrypt(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        self.encrypt_chars(&chars)
    }

    fn decrypt(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        self.decrypt_chars(&chars)
    }
}

/// Encrypts or decrypts `text` over `rails` rows in one call
pub fn apply(text: &str, rails: usize, direction: Direction) -> Result<String> {
    Ok(RailFence::new(rails)?.apply(text, direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rail_pattern_bounces() {
        let fence = RailFence::new(3).unwrap();
        assert_eq!(fence.rail_pattern(9), vec![0, 1, 2, 1, 0, 1, 2, 1, 0]);

        let fence = RailFence::new(2).unwrap();
        assert_eq!(fence.rail_pattern(5), vec![0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_encrypt_known_vector() {
        let text = "WEAREDISCOVEREDFLEEATONCE";
        assert_eq!(
            apply(text, 3, Direction::Encrypt).unwrap(),
            "WECRLTEERDSOEEFEAOCAIVDEN"
        );
    }

    #[test]
    fn test_decrypt_known_vector() {
        assert_eq!(
            apply("WECRLTEERDSOEEFEAOCAIVDEN", 3, Direction::Decrypt).unwrap(),
            "WEAREDISCOVEREDFLEEATONCE"
        );
    }

    #[test]
    fn test_round_trip_all_rail_counts() {
        let text = "Rail fence keeps Case, spaces & ünïcode.";
        for rails in 2..=50 {
            let fence = RailFence::new(rails).unwrap();
            let encrypted = fence.encrypt(text);
            assert_eq!(encrypted.chars().count(), text.chars().count());
            assert_eq!(fence.decrypt(&encrypted), text, "rails = {rails}");
        }
    }

    #[test]
    fn test_short_and_empty_texts() {
        let fence = RailFence::new(4).unwrap();
        assert_eq!(fence.encrypt(""), "");
        assert_eq!(fence.decrypt(""), "");
        assert_eq!(fence.encrypt("ab"), "ab");
        assert_eq!(fence.decrypt("ab"), "ab");
    }

    #[test]
    fn test_huge_rail_count_is_identity() {
        for rails in [usize::MAX, usize::MAX / 2 + 2, 1 << 40] {
            let fence = RailFence::new(rails).unwrap();
            assert_eq!(fence.encrypt("HELLO"), "HELLO");
            assert_eq!(fence.decrypt("HELLO"), "HELLO");
            assert_eq!(fence.encrypt("x"), "x");
            assert_eq!(fence.encrypt(""), "");
            assert_eq!(fence.decrypt(""), "");
        }
        assert_eq!(apply("HELLO", 5, Direction::Encrypt).unwrap(), "HELLO");
    }

    #[test]
    fn test_invalid_rail_count() {
        assert!(matches!(RailFence::new(0), Err(CipherError::InvalidParameter(_))));
        assert!(matches!(RailFence::new(1), Err(CipherError::InvalidParameter(_))));
        assert_eq!(RailFence::new(2).unwrap().rails(), 2);
    }
}
