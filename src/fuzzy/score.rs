// SPDX-License-Identifier: MIT OR Apache-2.0

//! Relevance score for one aligned term.
//!
//! Per-character scoring follows the familiar fuzzy-finder scheme: a flat
//! score per matched byte, boundary bonuses by character class, inherited
//! bonuses inside consecutive runs and an affine gap penalty. Whole-string
//! bonuses for exact, prefix and length-similar matches are added last.

use super::class::{boundary_bonus, classify, CharClass};

pub const SCORE_MATCH: i64 = 16;
pub const SCORE_GAP_START: i64 = -3;
pub const SCORE_GAP_EXTENSION: i64 = -1;

pub const BONUS_BOUNDARY_WHITE: i64 = 10;
pub const BONUS_BOUNDARY_DELIM: i64 = 9;
pub const BONUS_NON_WORD: i64 = 8;
pub const BONUS_CAMEL_CASE: i64 = 7;
pub const BONUS_CONSECUTIVE: i64 = 4;
pub const BONUS_FIRST_CHAR_MULTIPLIER: i64 = 2;

pub const BONUS_EXACT: i64 = 100;
pub const BONUS_PREFIX_PER_CHAR: i64 = 4;
pub const BONUS_SIMILARITY_MAX: i64 = 30;
const SIMILARITY_THRESHOLD: f64 = 0.5;

/// Score `positions` (as returned by [`align`](super::align)) for `term` in `text`.
pub fn score(term: &str, text: &str, positions: &[usize]) -> i64 {
    if positions.is_empty() {
        return 0;
    }

    let bytes = text.as_bytes();
    let mut total = 0;
    let mut run_start_bonus = 0;
    let mut prev_match: Option<usize> = None;

    for (i, &pos) in positions.iter().enumerate() {
        let prev_class = if pos == 0 {
            CharClass::White
        } else {
            classify(bytes[pos - 1])
        };
        let bonus = boundary_bonus(prev_class, classify(bytes[pos]));

        let char_score = match prev_match {
            Some(prev) if pos == prev + 1 => {
                SCORE_MATCH + bonus.max(run_start_bonus).max(BONUS_CONSECUTIVE)
            }
            _ => {
                let gap_penalty = prev_match
                    .map(|prev| {
                        let gap = (pos - prev - 1) as i64;
                        SCORE_GAP_START + SCORE_GAP_EXTENSION * (gap - 1)
                    })
                    .unwrap_or(0);
                run_start_bonus = bonus;
                SCORE_MATCH + bonus + gap_penalty
            }
        };

        total += char_score;
        if i == 0 {
            total += bonus * (BONUS_FIRST_CHAR_MULTIPLIER - 1);
        }
        prev_match = Some(pos);
    }

    if term.eq_ignore_ascii_case(text) {
        total += BONUS_EXACT;
    }

    let prefix_len = term
        .bytes()
        .zip(text.bytes())
        .take_while(|(a, b)| a.eq_ignore_ascii_case(b))
        .count() as i64;
    total += prefix_len * BONUS_PREFIX_PER_CHAR;

    let ratio = term.len() as f64 / text.len() as f64;
    if ratio > SIMILARITY_THRESHOLD {
        total += (ratio * BONUS_SIMILARITY_MAX as f64) as i64;
    }

    total
}
