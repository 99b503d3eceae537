//! Single-row runs, raw text, and linear fills.

use super::Painter;
use crate::attr::Attr;
use crate::cell::{CellCount, GlyphCount};
use crate::surface::CellSurface;

impl<S: CellSurface + ?Sized> Painter<'_, S> {
    /// Paint `length` copies of `ch` starting at (x, y).
    ///
    /// A wide `ch` covers `2 * length` cells. Any wide glyph cut by either
    /// end of the run is erased first. `attr`, when given, is applied to
    /// every cell the run covers.
    pub fn paint_run(&mut self, ch: char, x: u32, y: u32, length: GlyphCount, attr: Option<Attr>) {
        if length.is_zero() {
            return;
        }
        let per_char = self.cells_per_char(ch);
        let cells = length.to_cells(per_char);
        self.debug_check_point(x, y);

        self.erase(x, y);
        if length.get() > 1 {
            self.erase(x + length.get() - 1, y);
        }
        if per_char == 2 {
            // Last covered cell; for wide runs it lies past x + length - 1.
            self.erase(x + cells.get() - 1, y);
        }

        if let Some(attr) = attr {
            self.surface.write_attr_run(x, y, attr, cells);
        }
        self.surface.write_char_run(x, y, ch, length);
    }

    /// Write `text` as-is starting at (x, y) and return the cells it covers.
    ///
    /// No boundary erasure happens here: the destination is expected to be
    /// clear already or overwritten contiguously. `attr`, when given, is set
    /// on the covered cells before the text goes in.
    pub fn paint_text(&mut self, text: &str, x: u32, y: u32, attr: Option<Attr>) -> CellCount {
        let width = self.method.text_width(text);
        if let Some(attr) = attr {
            self.surface.write_attr_run(x, y, attr, width);
        }
        self.surface.write_raw(x, y, text);
        width
    }

    /// Fill `cells` cells linearly from (x, y) with `ch`, wrapping onto the
    /// following rows. Wide characters fill `cells / 2` glyphs.
    ///
    /// This is the fast path for clearing: no erasure and no attributes.
    pub fn quick_fill_char(&mut self, ch: char, x: u32, y: u32, cells: CellCount) {
        let glyphs = cells.to_glyphs(self.cells_per_char(ch));
        self.surface.write_char_run(x, y, ch, glyphs);
    }

    /// Set the attribute of `cells` cells linearly from (x, y).
    pub fn quick_fill_attr(&mut self, attr: Attr, x: u32, y: u32, cells: CellCount) {
        self.surface.write_attr_run(x, y, attr, cells);
    }

    /// Reset the whole surface to `ch`, and to `attr` when given.
    pub fn clear(&mut self, ch: char, attr: Option<Attr>) {
        let total = CellCount(self.surface.width().saturating_mul(self.surface.height()));
        if let Some(attr) = attr {
            self.quick_fill_attr(attr, 0, 0, total);
        }
        self.quick_fill_char(ch, 0, 0, total);
    }
}
