//! Grid cell and the two length units used to address runs of cells.
//!
//! A surface is a grid of [`Cell`]s. Each cell holds one character and one
//! [`Attr`]. A wide glyph occupies two adjacent cells and both cells carry the
//! same codepoint, so a read at either position sees the wide character.
//!
//! # Cells versus glyphs
//!
//! Run primitives count *glyphs* (how many characters to write) while
//! attribute runs and geometry count *cells*. For a narrow character the two
//! agree; for a wide one a glyph spans two cells. Mixing them up produces
//! runs that are half or double the intended length, so the two units are
//! separate types:
//!
//! ```
//! use gridswap::{CellCount, GlyphCount};
//!
//! let glyphs = GlyphCount(3);
//! assert_eq!(glyphs.to_cells(2), CellCount(6));
//! assert_eq!(CellCount(7).to_glyphs(2), GlyphCount(3));
//! ```

use crate::attr::Attr;
use std::fmt;
use std::ops::{Add, Sub};

/// The character written into erased cells.
pub const BLANK: char = ' ';

/// A single character position on a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Codepoint shown in this cell.
    pub ch: char,
    /// Color/style token.
    pub attr: Attr,
}

impl Cell {
    /// Create a cell.
    #[must_use]
    pub const fn new(ch: char, attr: Attr) -> Self {
        Self { ch, attr }
    }

    /// A blank cell with the default attribute.
    #[must_use]
    pub const fn blank() -> Self {
        Self::new(BLANK, Attr::DEFAULT)
    }

    /// Check whether the cell shows a blank.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.ch == BLANK
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

/// A length measured in grid cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellCount(pub u32);

/// A length measured in glyphs (characters written by a run primitive).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlyphCount(pub u32);

impl CellCount {
    pub const ZERO: CellCount = CellCount(0);

    /// Raw number of cells.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Number of whole glyphs of `cells_per_glyph` cells that fit.
    #[must_use]
    pub const fn to_glyphs(self, cells_per_glyph: u32) -> GlyphCount {
        debug_assert!(cells_per_glyph == 1 || cells_per_glyph == 2);
        GlyphCount(self.0 / cells_per_glyph)
    }

    #[must_use]
    pub const fn min(self, other: CellCount) -> CellCount {
        if self.0 < other.0 { self } else { other }
    }

    #[must_use]
    pub const fn saturating_sub(self, other: CellCount) -> CellCount {
        CellCount(self.0.saturating_sub(other.0))
    }
}

impl GlyphCount {
    pub const ZERO: GlyphCount = GlyphCount(0);

    /// Raw number of glyphs.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Cells covered by this many glyphs of `cells_per_glyph` cells each.
    #[must_use]
    pub const fn to_cells(self, cells_per_glyph: u32) -> CellCount {
        debug_assert!(cells_per_glyph == 1 || cells_per_glyph == 2);
        CellCount(self.0.saturating_mul(cells_per_glyph))
    }
}

/// Saturates at `u32::MAX`.
impl Add for CellCount {
    type Output = CellCount;

    fn add(self, rhs: CellCount) -> CellCount {
        CellCount(self.0.saturating_add(rhs.0))
    }
}

/// Saturates at zero, like [`CellCount::saturating_sub`].
impl Sub for CellCount {
    type Output = CellCount;

    fn sub(self, rhs: CellCount) -> CellCount {
        CellCount(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for CellCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cells", self.0)
    }
}

impl fmt::Display for GlyphCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} glyphs", self.0)
    }
}
