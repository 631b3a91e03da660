//! Bidirectional display preparation for mixed Persian/Latin strings.
//!
//! Preparing a string for rendering answers two questions: which way the
//! whole line flows, and which tokens carry digits that need normalizing
//! and an alternate numeral face. Classification and normalization are
//! deliberately separate steps: detection runs on the Persian-indic form
//! of a token, while the emitted text carries ASCII digits.

use crate::TextError;
use varaq_types::Direction;

/// A whitespace-delimited token with its script classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    pub text: String,
    /// True when the token carried Persian-indic digits and should be
    /// drawn with the configured alternate numeral face.
    pub uses_alt_font: bool,
}

/// A display-ready string: one direction for the whole line and one
/// segment per token, in logical order.
///
/// An RTL renderer reverses segment order at the container level, never
/// within a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText {
    pub direction: Direction,
    pub segments: Vec<TextSegment>,
}

const ARABIC_BLOCK_START: char = '\u{0600}';
const ARABIC_BLOCK_END: char = '\u{06FF}';
const ARABIC_DIGIT_ZERO: u32 = 0x0660;
const ARABIC_DIGIT_NINE: u32 = 0x0669;
const PERSIAN_DIGIT_ZERO: u32 = 0x06F0;
const PERSIAN_DIGIT_NINE: u32 = 0x06F9;

fn is_persian_char(c: char) -> bool {
    (ARABIC_BLOCK_START..=ARABIC_BLOCK_END).contains(&c)
}

fn is_arabic_digit(c: char) -> bool {
    (ARABIC_DIGIT_ZERO..=ARABIC_DIGIT_NINE).contains(&(c as u32))
}

fn is_persian_digit(c: char) -> bool {
    (PERSIAN_DIGIT_ZERO..=PERSIAN_DIGIT_NINE).contains(&(c as u32))
}

/// Folds Arabic-indic digits (U+0660-U+0669) into their Persian-indic
/// equivalents (U+06F0-U+06F9), leaving everything else untouched.
fn fold_arabic_digits(token: &str) -> String {
    token
        .chars()
        .map(|c| {
            if is_arabic_digit(c) {
                // The offset within the block is < 10, so the target
                // codepoint is always valid.
                char::from_u32(c as u32 - ARABIC_DIGIT_ZERO + PERSIAN_DIGIT_ZERO).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Classification step: does the token, in Persian-indic digit form,
/// contain any Persian-indic digit?
fn has_persian_digits(token: &str) -> bool {
    fold_arabic_digits(token).chars().any(is_persian_digit)
}

/// Normalization step: Persian-indic digits become ASCII digits. Runs on
/// the folded form so Arabic-indic input normalizes too.
fn normalize_digits(token: &str) -> String {
    fold_arabic_digits(token)
        .chars()
        .map(|c| {
            if is_persian_digit(c) {
                (b'0' + (c as u32 - PERSIAN_DIGIT_ZERO) as u8) as char
            } else {
                c
            }
        })
        .collect()
}

/// Prepares `text` for rendering: resolves the line direction, splits on
/// whitespace and classifies each token.
///
/// The direction is RTL when the string contains any character of the
/// Arabic Unicode block, LTR otherwise. Tokens that classify as carrying
/// Persian-indic digits are emitted with those digits normalized to ASCII
/// and flagged for the alternate numeral face.
///
/// Empty (or whitespace-only) input is not displayable and is signalled
/// as an error so the caller can pick a fallback.
pub fn normalize_for_display(text: &str) -> Result<DisplayText, TextError> {
    if text.trim().is_empty() {
        return Err(TextError::NotDisplayable);
    }

    let direction = if text.chars().any(is_persian_char) {
        Direction::Rtl
    } else {
        Direction::Ltr
    };

    let segments = text
        .split_whitespace()
        .map(|token| {
            let uses_alt_font = has_persian_digits(token);
            let text = if uses_alt_font {
                normalize_digits(token)
            } else {
                token.to_string()
            };
            TextSegment { text, uses_alt_font }
        })
        .collect();

    Ok(DisplayText { direction, segments })
}
