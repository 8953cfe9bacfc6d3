//! Cipher selection and the generic text cipher trait

use std::fmt;

use crate::alphabet::{AlphabetKind, AlphabetMapping};
use crate::codecs::{Morse, Pigpen};
use crate::error::Result;
use crate::polyalphabetic::Vigenere;
use crate::transposition::RailFence;

/// Which way a transform runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// The opposite direction
    pub fn inverse(self) -> Self {
        match self {
            Direction::Encrypt => Direction::Decrypt,
            Direction::Decrypt => Direction::Encrypt,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => write!(f, "encrypt"),
            Direction::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// Trait for a text-to-text cipher or codec
pub trait TextCipher {
    /// Encrypts (or encodes) a text
    fn encrypt(&self, text: &str) -> String;

    /// Decrypts (or decodes) a text
    fn decrypt(&self, text: &str) -> String;

    /// Runs the transform in the given direction
    fn apply(&self, text: &str, direction: Direction) -> String {
        match direction {
            Direction::Encrypt => self.encrypt(text),
            Direction::Decrypt => self.decrypt(text),
        }
    }
}

/// A supported cipher together with the parameter it needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    /// Shift (Caesar) cipher; any integer, reduced modulo 26
    Shift(i64),
    /// Keyword-derived substitution alphabet
    Keyword(String),
    /// Reverse-alphabet substitution (Atbash), self-inverse
    Mirror,
    /// Repeating-key polyalphabetic cipher
    Vigenere(String),
    /// Zigzag transposition over the given number of rails
    RailFence(usize),
    /// Dot-dash code
    Morse,
    /// Geometric grid/cross symbol code
    Pigpen,
}

impl Cipher {
    /// Short lowercase name of the cipher family
    pub fn name(&self) -> &'static str {
        match self {
            Cipher::Shift(_) => "shift",
            Cipher::Keyword(_) => "keyword",
            Cipher::Mirror => "mirror",
            Cipher::Vigenere(_) => "vigenere",
            Cipher::RailFence(_) => "rail-fence",
            Cipher::Morse => "morse",
            Cipher::Pigpen => "pigpen",
        }
    }

    /// Builds the engine for this cipher, validating its parameter
    pub fn engine(&self) -> Result<Box<dyn TextCipher>> {
        let engine: Box<dyn TextCipher> = match self {
            Cipher::Shift(shift) => Box::new(AlphabetMapping::build(AlphabetKind::Shift(*shift))?),
            Cipher::Keyword(keyword) => {
                Box::new(AlphabetMapping::build(AlphabetKind::Keyword(keyword))?)
            }
            Cipher::Mirror => Box::new(AlphabetMapping::build(AlphabetKind::Mirror)?),
            Cipher::Vigenere(keyword) => Box::new(Vigenere::new(keyword)?),
            Cipher::RailFence(rails) => Box::new(RailFence::new(*rails)?),
            Cipher::Morse => Box::new(Morse),
            Cipher::Pigpen => Box::new(Pigpen),
        };
        Ok(engine)
    }
}

/// Output of a transform together with the direction that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherResult {
    text: String,
    direction: Direction,
}

impl CipherResult {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for CipherResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Encrypts or decrypts `text` with the selected cipher.
///
/// Fails only when the cipher's parameter is invalid; characters a cipher
/// cannot map are passed through.
///
/// # Example
///
/// ```rust
/// use classic_ciphers::{transform, Cipher, Direction};
///
/// let result = transform(&Cipher::Shift(3), Direction::Encrypt, "HELLO")?;
/// assert_eq!(result.text(), "KHOOR");
/// # Ok::<(), classic_ciphers::CipherError>(())
/// ```
pub fn transform(cipher: &Cipher, direction: Direction, text: &str) -> Result<CipherResult> {
    tracing::debug!(cipher = cipher.name(), %direction, chars = text.chars().count(), "transform");
    let engine = cipher.engine()?;
    Ok(CipherResult {
        text: engine.apply(text, direction),
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;

    #[test]
    fn test_transform_every_cipher() {
        let cases = [
            (Cipher::Shift(3), "Hello, World!", "Khoor, Zruog!"),
            (Cipher::Keyword("KEYWORD".to_string()), "HELLO", "AOGGJ"),
            (Cipher::Mirror, "Hello", "Svool"),
            (Cipher::Vigenere("LEMON".to_string()), "ATTACKATDAWN", "LXFOPVEFRNHR"),
            (Cipher::RailFence(3), "WEAREDISCOVERED", "WECRERDSOEEAIVD"),
            (Cipher::Morse, "SOS", "... --- ..."),
            (Cipher::Pigpen, "AJ", "┘┘•"),
        ];

        for (cipher, plain, expected) in cases {
            let encrypted = transform(&cipher, Direction::Encrypt, plain).unwrap();
            assert_eq!(encrypted.text(), expected, "{}", cipher.name());
            assert_eq!(encrypted.direction(), Direction::Encrypt);
        }
    }

    #[test]
    fn test_transform_decrypt() {
        let result = transform(&Cipher::Shift(3), Direction::Decrypt, "KHOOR").unwrap();
        assert_eq!(result.to_string(), "HELLO");
        assert_eq!(result.direction(), Direction::Decrypt);
        assert_eq!(result.into_string(), "HELLO");
    }

    #[test]
    fn test_transform_rejects_bad_parameters() {
        assert!(matches!(
            transform(&Cipher::Keyword("123".to_string()), Direction::Encrypt, "abc"),
            Err(CipherError::InvalidParameter(_))
        ));
        assert_eq!(
            transform(&Cipher::Vigenere(" - ".to_string()), Direction::Encrypt, "abc"),
            Err(CipherError::MissingKey)
        );
        assert!(matches!(
            transform(&Cipher::RailFence(1), Direction::Encrypt, "abc"),
            Err(CipherError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_direction_inverse() {
        assert_eq!(Direction::Encrypt.inverse(), Direction::Decrypt);
        assert_eq!(Direction::Decrypt.inverse(), Direction::Encrypt);
    }
}
