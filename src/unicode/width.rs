//! Binary narrow/wide classification of characters.

use crate::cell::CellCount;
use unicode_width::UnicodeWidthChar;

/// Codepoints at or above this value are wide under [`WidthMethod::Threshold`].
pub const WIDE_THRESHOLD: u32 = 0x100;

/// How a painter decides whether a character spans two cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// Everything at or above U+0100 is wide. This is what console
    /// screen buffers configured for a CJK code page do, box drawing
    /// characters included.
    #[default]
    Threshold,
    /// Unicode East Asian Width: wide only when the character is reported
    /// as two columns (CJK ideographs, fullwidth forms, emoji).
    EastAsian,
}

impl WidthMethod {
    /// Check if a character takes two cells under this method.
    #[inline]
    #[must_use]
    pub fn is_wide(self, c: char) -> bool {
        match self {
            Self::Threshold => is_wide(c),
            Self::EastAsian => {
                !c.is_ascii() && UnicodeWidthChar::width(c).unwrap_or(0) == 2
            }
        }
    }

    /// Cells occupied by one glyph of `c` (1 or 2).
    #[inline]
    #[must_use]
    pub fn cells_per_char(self, c: char) -> u32 {
        if self.is_wide(c) { 2 } else { 1 }
    }

    /// Cells occupied by `text` when written left to right.
    /// Line breaks take no cells.
    #[must_use]
    pub fn text_width(self, text: &str) -> CellCount {
        CellCount(
            text.chars()
                .filter(|c| !is_line_break(*c))
                .map(|c| self.cells_per_char(c))
                .sum(),
        )
    }
}

/// Check if a character is wide (codepoint >= U+0100).
#[inline]
#[must_use]
pub const fn is_wide(c: char) -> bool {
    c as u32 >= WIDE_THRESHOLD
}

/// Cells occupied by one glyph of `c` under the threshold rule.
#[inline]
#[must_use]
pub const fn cells_per_char(c: char) -> u32 {
    if is_wide(c) { 2 } else { 1 }
}

/// `\n` and `\r` are skipped by raw writes.
#[inline]
pub(crate) const fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// Cells occupied by `text` under the threshold rule.
#[must_use]
pub fn text_width(text: &str) -> CellCount {
    WidthMethod::Threshold.text_width(text)
}
