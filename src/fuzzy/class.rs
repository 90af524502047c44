// SPDX-License-Identifier: MIT OR Apache-2.0

//! Byte-level character classes used for boundary bonuses.

use super::score::{BONUS_BOUNDARY_DELIM, BONUS_BOUNDARY_WHITE, BONUS_CAMEL_CASE, BONUS_NON_WORD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    White,
    Delimiter,
    Lower,
    Upper,
    Number,
    NonWord,
}

impl CharClass {
    pub fn is_alphanumeric(self) -> bool {
        matches!(self, CharClass::Lower | CharClass::Upper | CharClass::Number)
    }
}

/// Classify a single byte. Total over all inputs.
pub fn classify(byte: u8) -> CharClass {
    match byte {
        b' ' | b'\t' | b'\n' | b'\r' => CharClass::White,
        b'/' | b'.' | b',' | b':' | b';' | b'|' | b'-' | b'_' => CharClass::Delimiter,
        b'a'..=b'z' => CharClass::Lower,
        b'A'..=b'Z' => CharClass::Upper,
        b'0'..=b'9' => CharClass::Number,
        _ => CharClass::NonWord,
    }
}

/// Bonus for a match at `curr` given the class of the byte before it.
pub fn boundary_bonus(prev: CharClass, curr: CharClass) -> i64 {
    if !curr.is_alphanumeric() {
        return 0;
    }
    match prev {
        CharClass::White => BONUS_BOUNDARY_WHITE,
        CharClass::Delimiter => BONUS_BOUNDARY_DELIM,
        CharClass::NonWord => BONUS_NON_WORD,
        CharClass::Lower if curr == CharClass::Upper => BONUS_CAMEL_CASE,
        _ => 0,
    }
}
