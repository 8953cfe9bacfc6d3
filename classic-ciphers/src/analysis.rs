//! Letter frequency and Index of Coincidence analysis
//!
//! Every function here works on the cleaned form of its input: ASCII letters
//! only, uppercased. Everything else (digits, punctuation, whitespace,
//! non-ASCII letters) is ignored.

use std::fmt;

use crate::utils::{self, ALPHABET_LEN};

/// Occurrence count of every letter A-Z in a cleaned text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterFrequencies {
    counts: [u32; ALPHABET_LEN],
}

impl LetterFrequencies {
    /// Count of one letter (case-insensitive); 0 for non-letters
    pub fn count(&self, letter: char) -> u32 {
        utils::letter_index(letter).map_or(0, |index| self.counts[index])
    }

    /// All 26 counts, A first
    pub fn counts(&self) -> &[u32; ALPHABET_LEN] {
        &self.counts
    }

    /// Number of letters counted
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Share of each letter in the text; all zero for an empty table
    pub fn relative(&self) -> [f64; ALPHABET_LEN] {
        let total = self.total();
        if total == 0 {
            return [0.0; ALPHABET_LEN];
        }
        self.counts.map(|count| count as f64 / total as f64)
    }

    /// Most frequent letter, alphabetically first on ties; `None` when empty
    pub fn most_common(&self) -> Option<char> {
        let (index, &count) = self
            .counts
            .iter()
            .enumerate()
            .max_by(|(a_index, a), (b_index, b)| a.cmp(b).then(b_index.cmp(a_index)))?;
        (count > 0).then(|| utils::letter_at(index, false))
    }

    /// `(letter, count)` pairs, A first
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(index, &count)| (utils::letter_at(index, false), count))
    }
}

/// Index of Coincidence of a text together with its cleaned length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IocResult {
    pub text_length: usize,
    pub ioc: f64,
}

impl fmt::Display for IocResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IoC {:.4} over {} letters", self.ioc, self.text_length)
    }
}

/// Keeps only ASCII letters, uppercased
pub fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Counts the letters of `text`
pub fn frequencies(text: &str) -> LetterFrequencies {
    let mut counts = [0u32; ALPHABET_LEN];
    for index in text.chars().filter_map(utils::letter_index) {
        counts[index] += 1;
    }
    LetterFrequencies { counts }
}

/// Index of Coincidence with the number of letters it was computed over
pub fn coincidence(text: &str) -> IocResult {
    let table = frequencies(text);
    let total = table.total() as u64;

    let ioc = if total < 2 {
        0.0
    } else {
        let numerator: u64 = table
            .counts()
            .iter()
            .map(|&n| n as u64 * (n as u64).saturating_sub(1))
            .sum();
        numerator as f64 / (total * (total - 1)) as f64
    };

    IocResult {
        text_length: total as usize,
        ioc,
    }
}

/// Index of Coincidence: `Σ n(n-1) / (N(N-1))`, 0 below two letters
pub fn ioc(text: &str) -> f64 {
    coincidence(text).ioc
}

/// Deals the cleaned letters of `text` round-robin into `key_length` columns.
///
/// Column `i` holds every letter whose position modulo `key_length` is `i`,
/// i.e. all letters enciphered with the same key letter.
pub fn split_columns(text: &str, key_length: usize) -> Vec<String> {
    let mut columns = vec![String::new(); key_length];
    if key_length == 0 {
        return columns;
    }

    for (i, c) in clean_text(text).chars().enumerate() {
        columns[i % key_length].push(c);
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("Hello, Wörld 42!"), "HELLOWRLD");
    }

    #[test]
    fn test_frequencies() {
        let table = frequencies("Hello, World!");
        assert_eq!(table.count('l'), 3);
        assert_eq!(table.count('O'), 2);
        assert_eq!(table.count('z'), 0);
        assert_eq!(table.count('!'), 0);
        assert_eq!(table.total(), 10);
        assert_eq!(table.total() as usize, clean_text("Hello, World!").len());
        assert_eq!(table.most_common(), Some('L'));
    }

    #[test]
    fn test_relative_frequencies() {
        let relative = frequencies("AAB").relative();
        assert!((relative[0] - 2.0 / 3.0).abs() < 1e-12);
        assert!((relative[1] - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(frequencies("").relative(), [0.0; ALPHABET_LEN]);
    }

    #[test]
    fn test_most_common_ties_and_empty() {
        assert_eq!(frequencies("ZZAA").most_common(), Some('A'));
        assert_eq!(frequencies("123").most_common(), None);
    }

    #[test]
    fn test_iter_covers_alphabet() {
        let pairs: Vec<(char, u32)> = frequencies("abc").iter().collect();
        assert_eq!(pairs.len(), 26);
        assert_eq!(pairs[0], ('A', 1));
        assert_eq!(pairs[25], ('Z', 0));
    }

    #[test]
    fn test_ioc_edge_cases() {
        assert_eq!(ioc(""), 0.0);
        assert_eq!(ioc("A"), 0.0);
        assert_eq!(ioc("a!!"), 0.0);
        assert_eq!(ioc("AAAA"), 1.0);
        assert_eq!(ioc("AB"), 0.0);
    }

    #[test]
    fn test_ioc_calculation() {
        let uniform_text = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
        assert_eq!(ioc(uniform_text), 0.0);

        // counts A=2, B=2 -> (2 + 2) / (4 * 3)
        let result = coincidence("a-b-a-b");
        assert_eq!(result.text_length, 4);
        assert!((result.ioc - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_ioc_of_english_is_high() {
        let english = "It was the best of times, it was the worst of times, it was the age of \
                       wisdom, it was the age of foolishness, it was the epoch of belief";
        assert!(ioc(english) > 0.055);
    }

    #[test]
    fn test_split_columns() {
        let columns = split_columns("AB-CD ef gh", 3);
        assert_eq!(columns, vec!["ADG", "BEH", "CF"]);
    }

    #[test]
    fn test_split_columns_degenerate_lengths() {
        assert!(split_columns("ABC", 0).is_empty());
        assert_eq!(split_columns("ABC", 1), vec!["ABC"]);
        assert_eq!(split_columns("AB", 4), vec!["A", "B", "", ""]);
    }
}
