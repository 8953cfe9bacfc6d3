//! Letter helpers shared by the cipher engines

/// Number of letters in the Latin alphabet
pub const ALPHABET_LEN: usize = 26;

/// The uppercase alphabet in natural order
pub const ALPHABET: [u8; ALPHABET_LEN] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Position of an ASCII letter in the alphabet (A=0, case-insensitive)
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Letter at `index` (mod 26), lowercase when `lowercase` is set
pub fn letter_at(index: usize, lowercase: bool) -> char {
    let base = if lowercase { b'a' } else { b'A' };
    (base + (index % ALPHABET_LEN) as u8) as char
}

/// Shift an ASCII letter by `offset` positions, keeping its case.
/// Any other character is returned unchanged.
pub fn shift_letter(c: char, offset: usize) -> char {
    match letter_index(c) {
        Some(index) => letter_at(index + offset % ALPHABET_LEN, c.is_ascii_lowercase()),
        None => c,
    }
}

/// Reduce any integer shift into `0..26`
pub fn normalize_shift(shift: i64) -> usize {
    shift.rem_euclid(ALPHABET_LEN as i64) as usize
}
