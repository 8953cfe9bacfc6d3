//! Substitution alphabet construction
//!
//! An [`AlphabetMapping`] pairs the natural alphabet with a permutation of it.
//! Position `i` of the plain row encrypts to position `i` of the cipher row.
//! Mappings can only be built through [`AlphabetMapping::build`] (or the
//! shorthand constructors), so both rows are always full permutations of A-Z.

use crate::error::{CipherError, Result};
use crate::utils::{self, ALPHABET, ALPHABET_LEN};

/// Family and parameter of a substitution alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetKind<'a> {
    /// Rotate the alphabet; any integer is reduced modulo 26
    Shift(i64),
    /// Unique keyword letters followed by the unused remainder of the alphabet
    Keyword(&'a str),
    /// Reverse alphabet
    Mirror,
}

/// Index-aligned plain and cipher alphabets (uppercase ASCII)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlphabetMapping {
    plain: [u8; ALPHABET_LEN],
    cipher: [u8; ALPHABET_LEN],
}

impl AlphabetMapping {
    /// Builds the mapping for a cipher family.
    ///
    /// Fails with [`CipherError::InvalidParameter`] when a keyword contains
    /// no letters.
    pub fn build(kind: AlphabetKind<'_>) -> Result<Self> {
        let cipher = match kind {
            AlphabetKind::Shift(shift) => shift_alphabet(shift),
            AlphabetKind::Keyword(keyword) => keyword_alphabet(keyword)?,
            AlphabetKind::Mirror => mirror_alphabet(),
        };

        Ok(Self {
            plain: ALPHABET,
            cipher,
        })
    }

    pub fn shift(shift: i64) -> Self {
        Self {
            plain: ALPHABET,
            cipher: shift_alphabet(shift),
        }
    }

    pub fn keyword(keyword: &str) -> Result<Self> {
        Self::build(AlphabetKind::Keyword(keyword))
    }

    pub fn mirror() -> Self {
        Self {
            plain: ALPHABET,
            cipher: mirror_alphabet(),
        }
    }

    pub fn plain(&self) -> &[u8; ALPHABET_LEN] {
        &self.plain
    }

    pub fn cipher(&self) -> &[u8; ALPHABET_LEN] {
        &self.cipher
    }

    /// Cipher partner of a letter, keeping its case; other chars unchanged
    pub fn encrypt_letter(&self, c: char) -> char {
        Self::swap(c, &self.plain, &self.cipher)
    }

    /// Plain partner of a letter, keeping its case; other chars unchanged
    pub fn decrypt_letter(&self, c: char) -> char {
        Self::swap(c, &self.cipher, &self.plain)
    }

    fn swap(c: char, from: &[u8; ALPHABET_LEN], to: &[u8; ALPHABET_LEN]) -> char {
        if !c.is_ascii_alphabetic() {
            return c;
        }
        let upper = c.to_ascii_uppercase() as u8;
        match from.iter().position(|&letter| letter == upper) {
            Some(position) if c.is_ascii_lowercase() => to[position].to_ascii_lowercase() as char,
            Some(position) => to[position] as char,
            None => c,
        }
    }
}

fn shift_alphabet(shift: i64) -> [u8; ALPHABET_LEN] {
    let shift = utils::normalize_shift(shift);
    std::array::from_fn(|i| ALPHABET[(i + shift) % ALPHABET_LEN])
}

fn mirror_alphabet() -> [u8; ALPHABET_LEN] {
    std::array::from_fn(|i| ALPHABET[ALPHABET_LEN - 1 - i])
}

/// Keyword letters in first-occurrence order, then the rest of A-Z
fn keyword_alphabet(keyword: &str) -> Result<[u8; ALPHABET_LEN]> {
    let mut used = [false; ALPHABET_LEN];
    let mut order: Vec<u8> = Vec::with_capacity(ALPHABET_LEN);

    for index in keyword.chars().filter_map(utils::letter_index) {
        if !used[index] {
            used[index] = true;
            order.push(ALPHABET[index]);
        }
    }

    if order.is_empty() {
        return Err(CipherError::InvalidParameter(format!(
            "keyword {keyword:?} contains no letters"
        )));
    }

    order.extend(ALPHABET.iter().enumerate().filter(|(i, _)| !used[*i]).map(|(_, &letter)| letter));

    let mut cipher = [0u8; ALPHABET_LEN];
    cipher.copy_from_slice(&order);
    Ok(cipher)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(row: &[u8; ALPHABET_LEN]) -> bool {
        let mut sorted = *row;
        sorted.sort_unstable();
        sorted == ALPHABET
    }

    #[test]
    fn test_shift_alphabet() {
        let mapping = AlphabetMapping::build(AlphabetKind::Shift(3)).unwrap();
        assert_eq!(mapping.plain(), b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(mapping.cipher(), b"DEFGHIJKLMNOPQRSTUVWXYZABC");
    }

    #[test]
    fn test_shift_is_reduced_modulo_26() {
        let reference = AlphabetMapping::shift(3);
        assert_eq!(AlphabetMapping::shift(29), reference);
        assert_eq!(AlphabetMapping::shift(-23), reference);
        assert_eq!(AlphabetMapping::build(AlphabetKind::Shift(-23)).unwrap(), reference);
        assert_eq!(AlphabetMapping::shift(26).cipher(), &ALPHABET);
    }

    #[test]
    fn test_keyword_alphabet() {
        let mapping = AlphabetMapping::keyword("Zebras!").unwrap();
        assert_eq!(mapping.cipher(), b"ZEBRASCDFGHIJKLMNOPQTUVWXY");
        assert!(is_permutation(mapping.cipher()));
    }

    #[test]
    fn test_keyword_deduplicates_letters() {
        let mapping = AlphabetMapping::keyword("balloon").unwrap();
        assert_eq!(&mapping.cipher()[..5], b"BALON");
        assert!(is_permutation(mapping.cipher()));
    }

    #[test]
    fn test_keyword_without_letters_is_rejected() {
        assert!(matches!(
            AlphabetMapping::keyword(""),
            Err(CipherError::InvalidParameter(_))
        ));
        assert!(matches!(
            AlphabetMapping::keyword("42 !?"),
            Err(CipherError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_mirror_alphabet() {
        let mapping = AlphabetMapping::mirror();
        assert_eq!(mapping.cipher(), b"ZYXWVUTSRQPONMLKJIHGFEDCBA");
        for &letter in ALPHABET.iter() {
            let c = letter as char;
            assert_eq!(mapping.encrypt_letter(mapping.encrypt_letter(c)), c);
        }
    }

    #[test]
    fn test_letter_lookup_keeps_case() {
        let mapping = AlphabetMapping::shift(1);
        assert_eq!(mapping.encrypt_letter('a'), 'b');
        assert_eq!(mapping.encrypt_letter('Z'), 'A');
        assert_eq!(mapping.decrypt_letter('a'), 'z');
        assert_eq!(mapping.encrypt_letter('ß'), 'ß');
    }
}
