//! Rectangles and solid lines.

use super::Painter;
use crate::attr::Attr;
use crate::cell::{CellCount, GlyphCount};
use crate::surface::CellSurface;

impl<S: CellSurface + ?Sized> Painter<'_, S> {
    /// Fill `h` rows of `w` glyphs of `ch` starting at (x, y).
    pub fn fill_rect(
        &mut self,
        ch: char,
        x: u32,
        y: u32,
        w: GlyphCount,
        h: u32,
        attr: Option<Attr>,
    ) {
        for row in y..y.saturating_add(h) {
            self.paint_run(ch, x, row, w, attr);
        }
    }

    /// Set the attribute of a `w` x `h` cell rectangle, row by row.
    /// Characters are not touched.
    pub fn modify_attr(&mut self, attr: Attr, x: u32, y: u32, w: CellCount, h: u32) {
        if w.is_zero() {
            return;
        }
        for row in y..y.saturating_add(h) {
            self.surface.write_attr_run(x, row, attr, w);
        }
    }

    /// Attribute-only rectangle fill; same cells as [`Self::modify_attr`].
    pub fn fill_rect_attr(&mut self, attr: Attr, x: u32, y: u32, w: CellCount, h: u32) {
        self.modify_attr(attr, x, y, w, h);
    }

    /// Outline a rectangle of `w` glyphs by `h` rows with `ch`.
    ///
    /// Rectangles shorter than three rows have no interior and are filled.
    /// Otherwise only the top and bottom rows and the left and right edge
    /// glyphs are painted; interior cells keep their characters and
    /// attributes.
    pub fn fill_rect_hollow(
        &mut self,
        ch: char,
        x: u32,
        y: u32,
        w: GlyphCount,
        h: u32,
        attr: Option<Attr>,
    ) {
        if h < 3 {
            self.fill_rect(ch, x, y, w, h, attr);
            return;
        }
        if w.is_zero() {
            return;
        }
        let per_char = self.cells_per_char(ch);
        let bottom = y + h - 1;
        let right = x + (w.get() - 1) * per_char;

        self.paint_run(ch, x, y, w, attr);
        self.paint_run(ch, x, bottom, w, attr);
        for row in y + 1..bottom {
            self.paint_run(ch, x, row, GlyphCount(1), attr);
            self.paint_run(ch, right, row, GlyphCount(1), attr);
        }
    }

    /// Horizontal line of `w` glyphs.
    pub fn draw_line(&mut self, ch: char, x: u32, y: u32, w: GlyphCount, attr: Option<Attr>) {
        self.paint_run(ch, x, y, w, attr);
    }

    /// Vertical line of `h` rows, one glyph wide.
    pub fn draw_vertical_line(&mut self, ch: char, x: u32, y: u32, h: u32, attr: Option<Attr>) {
        self.fill_rect(ch, x, y, GlyphCount(1), h, attr);
    }
}
