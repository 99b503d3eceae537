//! Clipped drawing in view-local coordinates.
//!
//! A [`Viewport`] owns a [`Painter`] and a region of its surface. Every call
//! takes signed coordinates relative to the region's top-left corner, is
//! clipped to the part of the region that lies on the surface, and does
//! nothing when nothing is left. Shapes keep their geometry when clipped:
//! a hollow rectangle only draws the edges that are still in view, and a
//! dotted line keeps the phase it would have had if drawn whole.
//!
//! Wide glyphs drawn by a clipped call stay on the cells they would cover
//! unclipped; the visible half of one cut by the view is blanked. A wide
//! glyph already on the surface that straddles the edge of the view is
//! blanked whole when a call overwrites the half inside the view.

use super::{DashPattern, Painter, Rect};
use crate::attr::Attr;
use crate::cell::{BLANK, CellCount, GlyphCount};
use crate::error::{Error, Result};
use crate::surface::CellSurface;
use crate::unicode::{WidthMethod, is_line_break};

/// A clipped, origin-relative view over a painter.
pub struct Viewport<'s, S: CellSurface + ?Sized> {
    painter: Painter<'s, S>,
    /// Requested region, in surface coordinates.
    origin: Rect,
    /// `origin` clipped to the surface.
    visible: Rect,
}

impl<'s, S: CellSurface + ?Sized> Viewport<'s, S> {
    /// Create a view of `rect` (in surface coordinates).
    ///
    /// Fails with [`Error::OutOfBounds`] when no cell of `rect` lies on the
    /// surface.
    pub fn new(painter: Painter<'s, S>, rect: Rect) -> Result<Self> {
        let surface = Rect::of_size(painter.surface().width(), painter.surface().height());
        let visible = rect.intersect(&surface).ok_or(Error::OutOfBounds {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        })?;
        Ok(Self {
            painter,
            origin: rect,
            visible,
        })
    }

    /// The requested region in surface coordinates.
    #[must_use]
    pub fn origin(&self) -> Rect {
        self.origin
    }

    /// The part of the region that lies on the surface.
    #[must_use]
    pub fn visible(&self) -> Rect {
        self.visible
    }

    /// Width of the view in cells.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.origin.width
    }

    /// Height of the view in rows.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.origin.height
    }

    /// The unclipped painter underneath.
    pub fn painter(&mut self) -> &mut Painter<'s, S> {
        &mut self.painter
    }

    /// Give the painter back.
    pub fn into_painter(self) -> Painter<'s, S> {
        self.painter
    }

    fn width_method(&self) -> WidthMethod {
        self.painter.width_method()
    }

    /// A view-local rectangle in surface coordinates, unclipped.
    fn requested(&self, x: i32, y: i32, width: u32, height: u32) -> Rect {
        Rect::new(x, y, width, height).translate(self.origin.x, self.origin.y)
    }

    /// A view-local rectangle clipped to the view, in surface coordinates.
    fn clip(&self, x: i32, y: i32, width: u32, height: u32) -> Option<Rect> {
        self.requested(x, y, width, height).intersect(&self.visible)
    }

    /// Fill a `width` x `height` cell rectangle with `ch`.
    ///
    /// Wide glyphs keep the positions they have in the unclipped rectangle.
    /// A glyph cut by the view leaves its visible half blank. `attr`, when
    /// given, covers every clipped cell.
    pub fn fill_rect(
        &mut self,
        ch: char,
        x: i32,
        y: i32,
        width: CellCount,
        height: u32,
        attr: Option<Attr>,
    ) {
        let Some(bound) = self.clip(x, y, width.get(), height) else {
            return;
        };
        let full = self.requested(x, y, width.get(), height);
        let per_char = self.painter.cells_per_char(ch);
        let by = bound.y as u32;
        for row in by..by + bound.height {
            self.glyph_row(ch, full, bound, row, per_char, None);
        }
        if let Some(attr) = attr {
            self.painter
                .modify_attr(attr, bound.x as u32, by, CellCount(bound.width), bound.height);
        }
    }

    /// Outline a `width` x `height` cell rectangle with `ch`.
    ///
    /// Rectangles shorter than three rows are filled. Edges that fall outside
    /// the view are not drawn, so a partly visible box is not closed off at
    /// the view border. Visible edges sit where they would in the unclipped
    /// box.
    pub fn fill_rect_hollow(
        &mut self,
        ch: char,
        x: i32,
        y: i32,
        width: CellCount,
        height: u32,
        attr: Option<Attr>,
    ) {
        if height < 3 {
            self.fill_rect(ch, x, y, width, height, attr);
            return;
        }
        let Some(bound) = self.clip(x, y, width.get(), height) else {
            return;
        };
        let full = self.requested(x, y, width.get(), height);
        let per_char = self.painter.cells_per_char(ch);
        let full_glyphs = full.width / per_char;
        if full_glyphs == 0 {
            return;
        }

        if bound.y == full.y {
            self.glyph_row(ch, full, bound, bound.y as u32, per_char, attr);
        }
        if bound.bottom() == full.bottom() {
            self.glyph_row(ch, full, bound, (bound.bottom() - 1) as u32, per_char, attr);
        }

        let top = bound.y.max(full.y.saturating_add(1));
        let bottom = bound.bottom().min(full.bottom().saturating_sub(1));
        let left = (bound.x == full.x).then_some(bound.x);
        // Start of the last whole glyph of the unclipped top row.
        let last = i64::from(full.x) + i64::from((full_glyphs - 1) * per_char);
        let right = (bound.right() == full.right() && last >= i64::from(bound.x))
            .then_some(last as i32);
        for row in top..bottom {
            let row = row as u32;
            for edge in [left, right].into_iter().flatten() {
                self.painter.paint_run(ch, edge as u32, row, GlyphCount(1), attr);
            }
        }
    }

    /// Paint one row of `full`, clipped to `bound`, with glyphs laid out
    /// from `full.x`. Cells holding part of a cut glyph are blanked.
    fn glyph_row(
        &mut self,
        ch: char,
        full: Rect,
        bound: Rect,
        row: u32,
        per_char: u32,
        attr: Option<Attr>,
    ) {
        let Some(span) = GlyphSpan::new(full, bound, per_char) else {
            return;
        };
        if span.lead > 0 {
            self.painter
                .paint_run(BLANK, bound.x as u32, row, GlyphCount(span.lead), None);
        }
        self.painter.paint_run(ch, span.start, row, span.glyphs, attr);
        if span.tail > 0 {
            let at = span.start + span.glyphs.to_cells(per_char).get();
            self.painter.paint_run(BLANK, at, row, GlyphCount(span.tail), None);
        }
    }

    /// Set the attribute of a `width` x `height` cell rectangle.
    pub fn modify_rect(&mut self, attr: Attr, x: i32, y: i32, width: CellCount, height: u32) {
        let Some(bound) = self.clip(x, y, width.get(), height) else {
            return;
        };
        self.painter.modify_attr(
            attr,
            bound.x as u32,
            bound.y as u32,
            CellCount(bound.width),
            bound.height,
        );
    }

    /// Draw one line of text into the `max_width` cells starting at (x, y).
    ///
    /// The text is scrolled left by `offset_x` cells. Characters that do not
    /// fit entirely inside the window are dropped, and the cell a dropped
    /// wide character would have half covered is blanked. Line breaks take
    /// no cells.
    ///
    /// Returns how many more cells of `offset_x` are needed to bring the end
    /// of the text into the window; zero once it is visible. The value does
    /// not depend on clipping by the view.
    pub fn draw_string_line(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        max_width: CellCount,
        offset_x: u32,
        attr: Option<Attr>,
    ) -> CellCount {
        let method = self.width_method();
        let overflow = method
            .text_width(text)
            .saturating_sub(CellCount(offset_x))
            .saturating_sub(max_width);
        let Some(bound) = self.clip(x, y, max_width.get(), 1) else {
            return overflow;
        };
        let (left, right) = (i64::from(bound.x), i64::from(bound.right()));

        // Cells touched by any part of a character, and the byte range and
        // start column of the characters that fit whole.
        let mut touched: Option<(i64, i64)> = None;
        let mut shown: Option<(usize, usize, i64)> = None;
        let mut col = i64::from(self.origin.x) + i64::from(x) - i64::from(offset_x);
        for (i, ch) in text.char_indices() {
            if is_line_break(ch) {
                continue;
            }
            let start = col;
            let end = start + i64::from(method.cells_per_char(ch));
            col = end;
            if end <= left {
                continue;
            }
            if start >= right {
                break;
            }
            touched = Some(match touched {
                Some((t0, _)) => (t0, end.min(right)),
                None => (start.max(left), end.min(right)),
            });
            if start >= left && end <= right {
                let stop = i + ch.len_utf8();
                shown = Some(match shown {
                    Some((from, _, at)) => (from, stop, at),
                    None => (i, stop, start),
                });
            }
        }

        let Some((t0, t1)) = touched else {
            return overflow;
        };
        let row = bound.y as u32;
        self.painter.erase(t0 as u32, row);
        if t1 - 1 > t0 {
            self.painter.erase((t1 - 1) as u32, row);
        }
        if let Some((from, to, at)) = shown {
            self.painter.paint_text(&text[from..to], at as u32, row, attr);
        }
        overflow
    }

    /// Draw text wrapped into a box `max_width` cells wide and `max_height`
    /// rows tall, starting at (x, y).
    ///
    /// Lines break greedily at the last character that fits, and at every
    /// `\n`. The first `offset_y` wrapped lines are scrolled off the top.
    /// Returns the number of wrapped lines left below the box.
    pub fn draw_string_rect(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        max_width: CellCount,
        max_height: u32,
        offset_y: u32,
        attr: Option<Attr>,
    ) -> u32 {
        let lines = wrap_lines(text, max_width, self.width_method());
        let hidden = (lines.len() as u32).saturating_sub(offset_y.saturating_add(max_height));
        for (row, line) in lines
            .iter()
            .skip(offset_y as usize)
            .take(max_height as usize)
            .enumerate()
        {
            self.draw_string_line(line, x, y.saturating_add_unsigned(row as u32), max_width, 0, attr);
        }
        hidden
    }

    /// Horizontal dotted line of `span` cells and `thickness` rows starting
    /// at (x, y).
    ///
    /// When the start is clipped away, the pattern is advanced by the
    /// clipped distance so the visible segments and glyphs sit where they
    /// would in the whole line. See [`Painter::draw_dotted_line`] for the
    /// attribute rules.
    pub fn draw_dotted_line(
        &mut self,
        ch: char,
        x: i32,
        y: i32,
        span: CellCount,
        thickness: u32,
        pattern: DashPattern,
        attr: Option<Attr>,
        attr_on_gaps: bool,
    ) {
        let Some(bound) = self.clip(x, y, span.get(), thickness) else {
            return;
        };
        let skipped = bound.x.abs_diff(self.requested(x, y, span.get(), thickness).x);
        self.painter.draw_dotted_line(
            ch,
            bound.x as u32,
            bound.y as u32,
            CellCount(bound.width),
            bound.height,
            pattern.advanced(skipped),
            attr,
            attr_on_gaps,
        );
    }

    /// Vertical dotted line of `span` rows and `thickness` glyphs starting at
    /// (x, y).
    ///
    /// Re-phased like [`Self::draw_dotted_line`]. Glyph columns cut by the
    /// left or right edge of the view are not drawn.
    pub fn draw_vertical_dotted_line(
        &mut self,
        ch: char,
        x: i32,
        y: i32,
        span: CellCount,
        thickness: GlyphCount,
        pattern: DashPattern,
        attr: Option<Attr>,
        attr_on_gaps: bool,
    ) {
        let per_char = self.painter.cells_per_char(ch);
        let width = thickness.to_cells(per_char).get();
        let Some(bound) = self.clip(x, y, width, span.get()) else {
            return;
        };
        let full = self.requested(x, y, width, span.get());
        let Some(columns) = GlyphSpan::new(full, bound, per_char) else {
            return;
        };
        if columns.glyphs.is_zero() {
            return;
        }
        let skipped = bound.y.abs_diff(full.y);
        self.painter.draw_vertical_dotted_line(
            ch,
            columns.start,
            bound.y as u32,
            CellCount(bound.height),
            columns.glyphs,
            pattern.advanced(skipped),
            attr,
            attr_on_gaps,
        );
    }
}

impl<S: CellSurface + ?Sized> std::fmt::Debug for Viewport<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewport")
            .field("origin", &self.origin)
            .field("visible", &self.visible)
            .field("painter", &self.painter)
            .finish()
    }
}

/// Whole glyphs of a row laid out from `full.x`, clipped to `bound`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct GlyphSpan {
    /// Cells at `bound.x` holding the right part of a cut glyph.
    lead: u32,
    /// Surface column of the first whole glyph.
    start: u32,
    glyphs: GlyphCount,
    /// Cells after the last whole glyph holding the left part of a cut one.
    tail: u32,
}

impl GlyphSpan {
    /// `None` when no glyph of `full` reaches into `bound`.
    fn new(full: Rect, bound: Rect, per_char: u32) -> Option<Self> {
        let per = i64::from(per_char.max(1));
        let origin = i64::from(full.x);
        let left = i64::from(bound.x);
        let grid_end = origin + i64::from(full.width) / per * per;
        let right = i64::from(bound.right()).min(grid_end);
        if right <= left {
            return None;
        }
        let first = origin + (left - origin + per - 1) / per * per;
        let last = origin + (right - origin) / per * per;
        let glyphs = ((last - first) / per).max(0);
        Some(Self {
            lead: (first.min(right) - left) as u32,
            start: first as u32,
            glyphs: GlyphCount(glyphs as u32),
            tail: (right - last.max(first)) as u32,
        })
    }
}

/// Split `text` into lines of at most `max_width` cells.
///
/// A character wider than the whole line still gets a line of its own.
fn wrap_lines(text: &str, max_width: CellCount, method: WidthMethod) -> Vec<&str> {
    let max_width = max_width.get();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut width = 0;
    for (i, ch) in text.char_indices() {
        if ch == '\n' {
            lines.push(&text[start..i]);
            start = i + 1;
            width = 0;
            continue;
        }
        if is_line_break(ch) {
            continue;
        }
        let w = method.cells_per_char(ch);
        if width > 0 && width + w > max_width {
            lines.push(&text[start..i]);
            start = i;
            width = 0;
        }
        width += w;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
