//! Wide glyph detection and boundary erasure.
//!
//! Both cells of a wide glyph hold its codepoint, so a single read cannot
//! tell a leading half from a trailing one. Pairs are recovered by walking
//! left to the start of the contiguous run of wide cells: counting from that
//! start, cells pair up two by two. This holds as long as every overwrite at
//! a glyph boundary goes through [`Painter::erase`] first, which is exactly
//! what the run painters do.
//!
//! Surfaces that leave the trailing cell of a wide glyph blank instead are
//! handled by the lookback rule: a blank cell directly right of a leading
//! half is treated as that glyph's trailing half.

use super::Painter;
use crate::cell::{BLANK, GlyphCount};
use crate::surface::CellSurface;

impl<S: CellSurface + ?Sized> Painter<'_, S> {
    /// Check whether (x, y) is covered by a wide glyph.
    ///
    /// True when the character at (x, y) is wide, or when (x, y) is blank
    /// and the cell to its left holds a wide character.
    #[must_use]
    pub fn is_wide_at(&self, x: u32, y: u32) -> bool {
        if self.method.is_wide(self.surface.read_char(x, y)) {
            return true;
        }
        x > 0
            && self.surface.read_char(x, y) == BLANK
            && self.method.is_wide(self.surface.read_char(x - 1, y))
    }

    /// Left edge of the wide glyph covering (x, y), or `None` when the cell
    /// holds a narrow glyph.
    #[must_use]
    pub fn glyph_start(&self, x: u32, y: u32) -> Option<u32> {
        let ch = self.surface.read_char(x, y);
        if self.method.is_wide(ch) {
            return Some(self.pair_start(x, y));
        }
        if ch == BLANK && x > 0 && self.method.is_wide(self.surface.read_char(x - 1, y)) {
            // Blank trailing half, but only if x - 1 is a leading half.
            let left = x - 1;
            return (self.pair_start(left, y) == left).then_some(left);
        }
        None
    }

    /// Leading cell of the pair containing the wide cell at (x, y).
    fn pair_start(&self, x: u32, y: u32) -> u32 {
        let mut run_start = x;
        while run_start > 0 && self.method.is_wide(self.surface.read_char(run_start - 1, y)) {
            run_start -= 1;
        }
        x - (x - run_start) % 2
    }

    /// Blank the glyph occupying (x, y).
    ///
    /// For a wide glyph both of its cells are blanked, wherever (x, y) falls
    /// within it. Attributes are left alone.
    pub fn erase(&mut self, x: u32, y: u32) {
        self.debug_check_point(x, y);
        match self.glyph_start(x, y) {
            Some(left) => self.surface.write_char_run(left, y, BLANK, GlyphCount(2)),
            None => self.surface.write_char_run(x, y, BLANK, GlyphCount(1)),
        }
    }
}
