//! International Morse code

use crate::cipher::TextCipher;

/// Token standing for one space of the plain text
pub const WORD_SEPARATOR: &str = "/";

/// Marker emitted for a dot-dash sequence with no table entry
pub const UNKNOWN: char = '?';

const TABLE: [(char, &str); 36] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
];

/// Dot-dash codec over letters A-Z and digits 0-9
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Morse;

impl Morse {
    /// Dot-dash sequence of a letter or digit (case-insensitive)
    pub fn code(c: char) -> Option<&'static str> {
        let upper = c.to_ascii_uppercase();
        TABLE.iter().find(|(symbol, _)| *symbol == upper).map(|(_, code)| *code)
    }

    /// Letter or digit for a dot-dash sequence
    pub fn symbol(code: &str) -> Option<char> {
        TABLE.iter().find(|(_, entry)| *entry == code).map(|(symbol, _)| *symbol)
    }

    /// Encodes text: one code per letter, one [`WORD_SEPARATOR`] per space,
    /// every token separated by a single space.
    ///
    /// Characters without a code are dropped. Each whitespace character keeps
    /// its own separator, so `"A  B"` becomes `.- / / -...`.
    pub fn encode(text: &str) -> String {
        text.chars()
            .filter_map(|c| if c.is_whitespace() { Some(WORD_SEPARATOR) } else { Self::code(c) })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Decodes dot-dash text into uppercase letters.
    ///
    /// Every [`WORD_SEPARATOR`] becomes one space and unknown sequences become
    /// [`UNKNOWN`]; decoding never fails.
    pub fn decode(code: &str) -> String {
        let mut result = String::with_capacity(code.len() / 2);
        for token in code.split_whitespace() {
            // A separator may also sit flush against its codes, as in `.-/-...`
            for (i, piece) in token.split(WORD_SEPARATOR).enumerate() {
                if i > 0 {
                    result.push(' ');
                }
                if !piece.is_empty() {
                    result.push(Self::symbol(piece).unwrap_or(UNKNOWN));
                }
            }
        }
        result
    }
}

impl TextCipher for Morse {
    fn encrypt(&self, text: &str) -> String {
        Self::encode(text)
    }

    fn decrypt(&self, text: &str) -> String {
        Self::decode(text)
    }
}
