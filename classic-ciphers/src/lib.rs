//! # Classic Ciphers Library
//!
//! Historical ciphers and the statistics used to attack them.
//!
//! ## Supported Ciphers
//!
//! - **Shift** (Caesar) - rotate the alphabet by a fixed amount
//! - **Keyword** - substitution alphabet derived from a keyword
//! - **Mirror** (Atbash) - reversed alphabet, self-inverse
//! - **Vigenère** - repeating-key polyalphabetic shift
//! - **Rail fence** - zigzag transposition
//! - **Morse** - dot-dash code
//! - **Pigpen** - geometric grid/cross symbols
//!
//! ## Usage
//!
//! ```rust
//! use classic_ciphers::{transform, Cipher, Direction};
//!
//! let cipher = Cipher::Vigenere("LEMON".to_string());
//! let encrypted = transform(&cipher, Direction::Encrypt, "ATTACKATDAWN")?;
//! assert_eq!(encrypted.text(), "LXFOPVEFRNHR");
//!
//! let decrypted = transform(&cipher, Direction::Decrypt, encrypted.text())?;
//! assert_eq!(decrypted.text(), "ATTACKATDAWN");
//! # Ok::<(), classic_ciphers::CipherError>(())
//! ```
//!
//! ## Cryptanalysis
//!
//! - [`brute_force_shifts`] lists all 26 shift decryptions
//! - [`estimate_vigenere_key_length`] ranks key lengths by column Index of Coincidence

// Public modules
pub mod alphabet;
pub mod analysis;
pub mod cipher;
pub mod codecs;
pub mod cryptanalysis;
pub mod error;
pub mod polyalphabetic;
pub mod substitution;
pub mod transposition;
pub mod utils;

// Re-exports for easy access
pub use alphabet::{AlphabetKind, AlphabetMapping};
pub use analysis::{IocResult, LetterFrequencies};
pub use cipher::{transform, Cipher, CipherResult, Direction, TextCipher};
pub use codecs::{Morse, Pigpen};
pub use cryptanalysis::{KeyLengthCandidate, ShiftCandidate};
pub use error::{CipherError, Result};
pub use polyalphabetic::Vigenere;
pub use transposition::RailFence;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Names of all supported cipher families
pub fn supported_ciphers() -> Vec<&'static str> {
    vec!["shift", "keyword", "mirror", "vigenere", "rail-fence", "morse", "pigpen"]
}

/// All 26 shift decryptions of `ciphertext`, ordered by shift
pub fn brute_force_shifts(ciphertext: &str) -> Vec<ShiftCandidate> {
    cryptanalysis::all_shifts(ciphertext)
}

/// Probable Vigenère key lengths of `ciphertext`, best first
pub fn estimate_vigenere_key_length(ciphertext: &str) -> Result<Vec<KeyLengthCandidate>> {
    cryptanalysis::estimate_key_length(ciphertext)
}
