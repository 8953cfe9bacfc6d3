//! Non-alphabetic codecs
//!
//! These replace letters with symbols instead of other letters. Neither
//! codec ever fails: input without a table entry is dropped (Morse encode),
//! replaced by [`morse::UNKNOWN`] (Morse decode) or passed through (pigpen).

pub mod morse;
pub mod pigpen;

pub use morse::Morse;
pub use pigpen::{Pigpen, PigpenShape, PigpenSymbol};
