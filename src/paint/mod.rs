//! Glyph, run and shape painting over a [`CellSurface`].
//!
//! A [`Painter`] borrows one surface for the duration of a batch of draw
//! calls. It holds no state between calls beyond that borrow, so dotted
//! lines, rectangles and text can be drawn in any order and any call can be
//! repeated to reproduce the same cells.
//!
//! The layers, bottom up:
//!
//! - **erase** ([`Painter::erase`]): blanks the whole wide glyph covering a
//!   cell, so overwriting half of a wide glyph never leaves the other half
//!   on screen.
//! - **runs** ([`Painter::paint_run`], [`Painter::paint_text`]): one row of a
//!   repeated character plus an optional attribute run.
//! - **shapes** ([`Painter::fill_rect`], [`Painter::fill_rect_hollow`],
//!   lines, [`Painter::draw_dotted_line`]): built out of runs.
//! - **viewport** ([`Viewport`]): clipped, origin-relative drawing for
//!   geometry that comes from untrusted input.
//!
//! Painter calls trust their geometry. Coordinates outside the surface are
//! handed straight to the surface, whose own bounds rules apply; debug builds
//! assert on them.
//!
//! # Examples
//!
//! ```
//! use gridswap::{Attr, GlyphCount, GridSurface, Painter};
//!
//! let mut surface = GridSurface::new(10, 3);
//! let mut painter = Painter::new(&mut surface);
//! painter.fill_rect_hollow('#', 0, 0, GlyphCount(5), 3, Some(Attr::FOREGROUND_GREEN));
//! painter.paint_text("hi", 6, 1, None);
//!
//! assert_eq!(surface.row_text(0), "#####     ");
//! assert_eq!(surface.row_text(1), "#   # hi  ");
//! assert_eq!(surface.row_text(2), "#####     ");
//! ```

#![allow(clippy::too_many_arguments)]

mod dotted;
mod erase;
mod rect;
mod run;
mod shape;
mod viewport;

pub use dotted::DashPattern;
pub use rect::Rect;
pub use viewport::Viewport;

use crate::surface::CellSurface;
use crate::unicode::WidthMethod;

/// Draws into one borrowed surface.
pub struct Painter<'s, S: CellSurface + ?Sized> {
    surface: &'s mut S,
    method: WidthMethod,
}

impl<'s, S: CellSurface + ?Sized> Painter<'s, S> {
    /// Borrow `surface` for painting, using its wide-character rule.
    pub fn new(surface: &'s mut S) -> Self {
        let method = surface.width_method();
        Self { surface, method }
    }

    /// The surface being painted.
    #[must_use]
    pub fn surface(&self) -> &S {
        &*self.surface
    }

    /// Mutable access to the surface, for primitives the painter lacks.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut *self.surface
    }

    /// Wide-character rule in effect.
    #[must_use]
    pub fn width_method(&self) -> WidthMethod {
        self.method
    }

    /// Cells covered by one glyph of `ch` on this surface.
    #[inline]
    #[must_use]
    pub fn cells_per_char(&self, ch: char) -> u32 {
        self.method.cells_per_char(ch)
    }

    /// Wrap this painter in a clipped viewport.
    pub fn viewport(self, rect: Rect) -> crate::Result<Viewport<'s, S>> {
        Viewport::new(self, rect)
    }

    #[inline]
    fn debug_check_point(&self, x: u32, y: u32) {
        debug_assert!(
            x < self.surface.width() && y < self.surface.height(),
            "({x}, {y}) outside {}x{} surface",
            self.surface.width(),
            self.surface.height()
        );
    }
}

impl<S: CellSurface + ?Sized> std::fmt::Debug for Painter<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Painter")
            .field("width", &self.surface.width())
            .field("height", &self.surface.height())
            .field("method", &self.method)
            .finish()
    }
}
