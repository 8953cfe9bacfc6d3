//! Pigpen (masonic) geometric cipher
//!
//! Letters are placed into two tic-tac-toe grids and two X shapes; the second
//! grid and the second X carry a dot in every cell:
//!
//! ```text
//!  A | B | C     J•| K•| L•       \ S /      \ W• /
//! ---+---+---   ---+---+---      T X U     X•  X  Y•
//!  D | E | F     M•| N•| O•       / V \      / Z• \
//! ---+---+---   ---+---+---
//!  G | H | I     P•| Q•| R•
//! ```
//!
//! A letter is written as the outline of its cell, followed by
//! [`DOT`] when the cell is dotted.

use crate::cipher::TextCipher;
use crate::utils;

/// Marker appended to the glyph of a dotted cell
pub const DOT: char = '•';

/// Outline of each tic-tac-toe cell, row by row
const GRID_GLYPHS: [char; 9] = ['┘', '⊔', '└', '⊐', '□', '⊏', '┐', '⊓', '┌'];

/// Outline of each X wedge: top, left, right, bottom
const CROSS_GLYPHS: [char; 4] = ['∨', '⟩', '⟨', '∧'];

/// Which frame a letter is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PigpenShape {
    Grid,
    Cross,
}

/// Drawn form of a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PigpenSymbol {
    pub shape: PigpenShape,
    /// Cell inside the frame (0..9 for the grid, 0..4 for the cross)
    pub cell: usize,
    pub dotted: bool,
}

impl PigpenSymbol {
    /// Outline glyph of the cell, without the dot marker
    pub fn glyph(&self) -> char {
        match self.shape {
            PigpenShape::Grid => GRID_GLYPHS[self.cell],
            PigpenShape::Cross => CROSS_GLYPHS[self.cell],
        }
    }

    /// Uppercase letter drawn by this symbol
    pub fn letter(&self) -> char {
        let index = match (self.shape, self.dotted) {
            (PigpenShape::Grid, false) => self.cell,
            (PigpenShape::Grid, true) => 9 + self.cell,
            (PigpenShape::Cross, false) => 18 + self.cell,
            (PigpenShape::Cross, true) => 22 + self.cell,
        };
        utils::letter_at(index, false)
    }

    fn from_glyph(glyph: char, dotted: bool) -> Option<Self> {
        if let Some(cell) = GRID_GLYPHS.iter().position(|&g| g == glyph) {
            return Some(Self { shape: PigpenShape::Grid, cell, dotted });
        }
        CROSS_GLYPHS
            .iter()
            .position(|&g| g == glyph)
            .map(|cell| Self { shape: PigpenShape::Cross, cell, dotted })
    }
}

/// Pigpen codec over the 26 letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pigpen;

impl Pigpen {
    /// Symbol for an ASCII letter (case-insensitive)
    pub fn symbol(letter: char) -> Option<PigpenSymbol> {
        let index = utils::letter_index(letter)?;
        let (shape, cell, dotted) = match index {
            0..=8 => (PigpenShape::Grid, index, false),
            9..=17 => (PigpenShape::Grid, index - 9, true),
            18..=21 => (PigpenShape::Cross, index - 18, false),
            _ => (PigpenShape::Cross, index - 22, true),
        };
        Some(PigpenSymbol { shape, cell, dotted })
    }

    /// Draws every letter; other characters pass through
    pub fn encode(text: &str) -> String {
        let mut result = String::with_capacity(text.len() * 2);
        for c in text.chars() {
            match Self::symbol(c) {
                Some(symbol) => {
                    result.push(symbol.glyph());
                    if symbol.dotted {
                        result.push(DOT);
                    }
                }
                None => result.push(c),
            }
        }
        result
    }

    /// Reads glyphs back into uppercase letters; anything else passes through.
    ///
    /// The round trip is lossy for plain text that already holds glyph
    /// characters or [`DOT`]: [`Pigpen::encode`] passes them through untouched,
    /// and decoding then reads them as letters or as the dot of the glyph
    /// before them.
    pub fn decode(code: &str) -> String {
        let mut result = String::with_capacity(code.len());
        let mut chars = code.chars().peekable();

        while let Some(c) = chars.next() {
            let dotted = chars.peek() == Some(&DOT);
            match PigpenSymbol::from_glyph(c, dotted) {
                Some(symbol) => {
                    if dotted {
                        chars.next();
                    }
                    result.push(symbol.letter());
                }
                None => result.push(c),
            }
        }

        result
    }
}

impl TextCipher for Pigpen {
    fn encrypt(&self, text: &str) -> String {
        Self::encode(text)
    }

    fn decrypt(&self, text: &str) -> String {
        Self::decode(text)
    }
}
