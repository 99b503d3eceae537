//! Dotted (dashed) lines with a phase offset.
//!
//! A [`DashPattern`] alternates `line` painted cells with `air` blank cells.
//! The `phase` says how far into that cycle the first cell of a line sits, so
//! two separately drawn segments of one border line up when the second starts
//! with the phase where the first one ended.

use super::Painter;
use crate::attr::Attr;
use crate::cell::{BLANK, CellCount, GlyphCount};
use crate::surface::CellSurface;

/// On/off pattern for dotted lines, in cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashPattern {
    /// Painted cells per cycle.
    pub line: u32,
    /// Blank cells per cycle.
    pub air: u32,
    /// Offset into the cycle at the first cell, `0..line + air`.
    pub phase: u32,
}

impl DashPattern {
    /// Pattern starting at the beginning of a painted segment.
    #[must_use]
    pub const fn new(line: u32, air: u32) -> Self {
        Self {
            line,
            air,
            phase: 0,
        }
    }

    /// Same pattern starting `phase` cells into the cycle.
    #[must_use]
    pub const fn with_phase(mut self, phase: u32) -> Self {
        self.phase = phase;
        self
    }

    /// Length of one on/off cycle.
    #[must_use]
    pub const fn period(&self) -> u32 {
        self.line.saturating_add(self.air)
    }

    /// The pattern as seen `by` cells further along the line.
    #[must_use]
    pub const fn advanced(self, by: u32) -> Self {
        let period = self.period();
        if period == 0 {
            return self;
        }
        let phase = ((self.phase % period) as u64 + by as u64) % period as u64;
        self.with_phase(phase as u32)
    }

    /// Split a line of `span` cells into on/off segments.
    #[must_use]
    pub fn segments(&self, span: CellCount) -> DashSegments {
        DashSegments::new(*self, span.get())
    }
}

/// One stretch of a dotted line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashSegment {
    /// Cells from the start of the line.
    pub offset: u32,
    /// Length in cells.
    pub len: u32,
    /// True for painted cells, false for gaps.
    pub on: bool,
}

/// Iterator over the segments of a dotted line.
///
/// The first segment is whatever remains of the cycle position given by the
/// phase; after that full segments alternate, the last one clamped to the
/// span. Zero-length segments are skipped.
#[derive(Clone, Debug)]
pub struct DashSegments {
    pos: u32,
    end: u32,
    line: u32,
    air: u32,
    on: bool,
    first: Option<u32>,
}

impl DashSegments {
    fn new(pattern: DashPattern, span: u32) -> Self {
        let period = pattern.period();
        if period == 0 {
            return Self {
                pos: 0,
                end: 0,
                line: 0,
                air: 0,
                on: false,
                first: None,
            };
        }
        debug_assert!(pattern.phase < period, "phase {} >= period {period}", pattern.phase);
        let phase = pattern.phase % period;
        let (on, first) = if phase < pattern.line {
            (true, pattern.line - phase)
        } else {
            (false, period - phase)
        };
        Self {
            pos: 0,
            end: span,
            line: pattern.line,
            air: pattern.air,
            on,
            first: Some(first),
        }
    }
}

impl Iterator for DashSegments {
    type Item = DashSegment;

    fn next(&mut self) -> Option<DashSegment> {
        while self.pos < self.end {
            let full = self
                .first
                .take()
                .unwrap_or(if self.on { self.line } else { self.air });
            let len = full.min(self.end - self.pos);
            let segment = DashSegment {
                offset: self.pos,
                len,
                on: self.on,
            };
            self.pos += len;
            self.on = !self.on;
            if len > 0 {
                return Some(segment);
            }
        }
        None
    }
}

impl<S: CellSurface + ?Sized> Painter<'_, S> {
    /// Draw a horizontal dotted line of `span` cells starting at (x, y) and
    /// `thickness` rows tall.
    ///
    /// Painted segments hold `ch`; gaps are blanked. A wide `ch` fills each
    /// painted segment with as many whole glyphs as fit and blanks an odd
    /// leftover cell. Glyphs sit on a grid that starts where their segment
    /// starts, so a line whose phase lands on the right half of a glyph
    /// blanks that first cell and continues on the same grid.
    ///
    /// With `attr_on_gaps`, `attr` is written once over the full span and the
    /// segments only change characters. Otherwise painted segments receive
    /// `attr` and gaps keep whatever attribute they already had.
    pub fn draw_dotted_line(
        &mut self,
        ch: char,
        x: u32,
        y: u32,
        span: CellCount,
        thickness: u32,
        pattern: DashPattern,
        attr: Option<Attr>,
        attr_on_gaps: bool,
    ) {
        if attr_on_gaps {
            if let Some(attr) = attr {
                self.modify_attr(attr, x, y, span, thickness);
            }
        }
        let on_attr = if attr_on_gaps { None } else { attr };
        let per_char = self.cells_per_char(ch);
        let mut cut = cut_glyph_cells(pattern, per_char);

        for segment in pattern.segments(span) {
            let sx = x + segment.offset;
            if !segment.on {
                self.fill_rect(BLANK, sx, y, GlyphCount(segment.len), thickness, None);
                cut = 0;
                continue;
            }
            let lead = cut.min(segment.len);
            cut = 0;
            if lead > 0 {
                self.fill_rect(BLANK, sx, y, GlyphCount(lead), thickness, None);
            }
            let glyphs = CellCount(segment.len - lead).to_glyphs(per_char);
            self.fill_rect(ch, sx + lead, y, glyphs, thickness, on_attr);
            let covered = lead + glyphs.to_cells(per_char).get();
            if covered < segment.len {
                self.fill_rect(BLANK, sx + covered, y, GlyphCount(segment.len - covered), thickness, None);
            }
        }
    }

    /// Draw a vertical dotted line of `span` rows starting at (x, y) and
    /// `thickness` glyphs of `ch` wide.
    ///
    /// Gap rows are blanked across the same width. Attributes follow
    /// [`Self::draw_dotted_line`].
    pub fn draw_vertical_dotted_line(
        &mut self,
        ch: char,
        x: u32,
        y: u32,
        span: CellCount,
        thickness: GlyphCount,
        pattern: DashPattern,
        attr: Option<Attr>,
        attr_on_gaps: bool,
    ) {
        let width = thickness.to_cells(self.cells_per_char(ch));
        if attr_on_gaps {
            if let Some(attr) = attr {
                self.modify_attr(attr, x, y, width, span.get());
            }
        }
        let on_attr = if attr_on_gaps { None } else { attr };

        for segment in pattern.segments(span) {
            let sy = y + segment.offset;
            if segment.on {
                self.fill_rect(ch, x, sy, thickness, segment.len, on_attr);
            } else {
                self.fill_rect(BLANK, x, sy, GlyphCount(width.get()), segment.len, None);
            }
        }
    }
}

/// Cells of a glyph already behind the start of a line whose phase falls
/// inside a painted segment.
const fn cut_glyph_cells(pattern: DashPattern, per_char: u32) -> u32 {
    let period = pattern.period();
    if period == 0 || per_char == 0 {
        return 0;
    }
    let phase = pattern.phase % period;
    if phase < pattern.line { phase % per_char } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::surface::GridSurface;

    fn seg(offset: u32, len: u32, on: bool) -> DashSegment {
        DashSegment { offset, len, on }
    }

    #[test]
    fn test_segments_from_zero_phase() {
        let segments: Vec<_> = DashPattern::new(3, 2).segments(CellCount(12)).collect();
        assert_eq!(
            segments,
            vec![
                seg(0, 3, true),
                seg(3, 2, false),
                seg(5, 3, true),
                seg(8, 2, false),
                seg(10, 2, true),
            ]
        );
    }

    #[test]
    fn test_segments_phase_in_gap() {
        let segments: Vec<_> = DashPattern::new(3, 2)
            .with_phase(4)
            .segments(CellCount(10))
            .collect();
        assert_eq!(
            segments,
            vec![
                seg(0, 1, false),
                seg(1, 3, true),
                seg(4, 2, false),
                seg(6, 3, true),
                seg(9, 1, false),
            ]
        );
    }

    #[test]
    fn test_segments_phase_in_line() {
        let segments: Vec<_> = DashPattern::new(4, 1)
            .with_phase(1)
            .segments(CellCount(6))
            .collect();
        assert_eq!(
            segments,
            vec![seg(0, 3, true), seg(3, 1, false), seg(4, 2, true)]
        );
    }

    #[test]
    fn test_segments_first_clamped_to_span() {
        let segments: Vec<_> = DashPattern::new(5, 5)
            .with_phase(1)
            .segments(CellCount(2))
            .collect();
        assert_eq!(segments, vec![seg(0, 2, true)]);
    }

    #[test]
    fn test_zero_air_is_solid() {
        let segments: Vec<_> = DashPattern::new(2, 0).segments(CellCount(5)).collect();
        assert_eq!(
            segments,
            vec![seg(0, 2, true), seg(2, 2, true), seg(4, 1, true)]
        );
    }

    #[test]
    fn test_empty_pattern_and_span() {
        assert_eq!(DashPattern::new(0, 0).segments(CellCount(8)).count(), 0);
        assert_eq!(DashPattern::new(2, 2).segments(CellCount::ZERO).count(), 0);
    }

    #[test]
    fn test_advanced_wraps() {
        let pattern = DashPattern::new(3, 2).with_phase(4);
        assert_eq!(pattern.advanced(3).phase, 2);
        assert_eq!(pattern.advanced(0).phase, 4);
        // u32::MAX is a multiple of 5.
        assert_eq!(pattern.advanced(u32::MAX).phase, 4);
        assert_eq!(DashPattern::new(0, 0).advanced(7).phase, 0);
    }

    #[test]
    fn test_horizontal_scenario() {
        let mut surface = GridSurface::new(10, 1);
        surface.fill(Cell::new('x', Attr::DEFAULT));
        Painter::new(&mut surface).draw_dotted_line(
            '-',
            0,
            0,
            CellCount(10),
            1,
            DashPattern::new(3, 2).with_phase(4),
            None,
            false,
        );
        assert_eq!(surface.row_text(0), " ---  --- ");
    }

    #[test]
    fn test_attr_only_on_painted_cells() {
        let mut surface = GridSurface::new(6, 1);
        Painter::new(&mut surface).draw_dotted_line(
            '=',
            0,
            0,
            CellCount(6),
            1,
            DashPattern::new(2, 1),
            Some(Attr::FOREGROUND_RED),
            false,
        );
        assert_eq!(surface.row_text(0), "== == ");
        let red = Attr::FOREGROUND_RED;
        let def = Attr::DEFAULT;
        assert_eq!(surface.row_attrs(0), vec![red, red, def, red, red, def]);
    }

    #[test]
    fn test_attr_on_gaps_covers_span() {
        let mut surface = GridSurface::new(8, 1);
        Painter::new(&mut surface).draw_dotted_line(
            '=',
            1,
            0,
            CellCount(6),
            1,
            DashPattern::new(2, 1),
            Some(Attr::BACKGROUND_BLUE),
            true,
        );
        assert_eq!(surface.row_text(0), " == ==  ");
        let attrs = surface.row_attrs(0);
        assert_eq!(attrs[0], Attr::DEFAULT);
        assert!(attrs[1..7].iter().all(|a| *a == Attr::BACKGROUND_BLUE));
        assert_eq!(attrs[7], Attr::DEFAULT);
    }

    #[test]
    fn test_wide_dotted_line_blanks_odd_leftover() {
        let mut surface = GridSurface::new(8, 1);
        surface.fill(Cell::new('x', Attr::DEFAULT));
        Painter::new(&mut surface).draw_dotted_line(
            '中',
            0,
            0,
            CellCount(8),
            1,
            DashPattern::new(3, 1),
            None,
            false,
        );
        assert_eq!(surface.row_text(0), "中中  中中  ");
    }

    #[test]
    fn test_wide_dotted_line_phase_inside_glyph() {
        let mut surface = GridSurface::new(10, 1);
        surface.fill(Cell::new('x', Attr::DEFAULT));
        Painter::new(&mut surface).draw_dotted_line(
            '中',
            0,
            0,
            CellCount(9),
            1,
            DashPattern::new(4, 1).with_phase(1),
            None,
            false,
        );
        // The glyph at cycle cells 0-1 is cut; cells 2-3 keep their glyph.
        assert_eq!(surface.row_text(0), " 中中 中中中中 x");
    }

    #[test]
    fn test_zero_line_draws_only_gaps() {
        let pattern = DashPattern::new(0, 3);
        let segments: Vec<_> = pattern.segments(CellCount(7)).collect();
        assert_eq!(
            segments,
            vec![seg(0, 3, false), seg(3, 3, false), seg(6, 1, false)]
        );

        let mut surface = GridSurface::new(8, 1);
        surface.fill(Cell::new('x', Attr::DEFAULT));
        Painter::new(&mut surface).draw_dotted_line(
            '-',
            0,
            0,
            CellCount(7),
            1,
            pattern,
            Some(Attr::FOREGROUND_RED),
            false,
        );
        assert_eq!(surface.row_text(0), "       x");
        assert!(surface.row_attrs(0).iter().all(|a| *a == Attr::DEFAULT));
    }

    #[test]
    fn test_thick_dotted_line() {
        let mut surface = GridSurface::new(6, 3);
        surface.fill(Cell::new('x', Attr::DEFAULT));
        Painter::new(&mut surface).draw_dotted_line(
            '=',
            0,
            0,
            CellCount(6),
            2,
            DashPattern::new(2, 1),
            Some(Attr::BACKGROUND_BLUE),
            true,
        );
        assert_eq!(surface.row_text(0), "== == ");
        assert_eq!(surface.row_text(1), "== == ");
        assert_eq!(surface.row_text(2), "xxxxxx");
        assert!(surface.row_attrs(1).iter().all(|a| *a == Attr::BACKGROUND_BLUE));
        assert!(surface.row_attrs(2).iter().all(|a| *a == Attr::DEFAULT));
    }

    #[test]
    fn test_zero_thickness_draws_nothing() {
        let mut surface = GridSurface::new(4, 4);
        let before = surface.clone();
        let mut painter = Painter::new(&mut surface);
        painter.draw_dotted_line('-', 0, 0, CellCount(4), 0, DashPattern::new(1, 1), None, false);
        painter.draw_vertical_dotted_line(
            '|',
            0,
            0,
            CellCount(4),
            GlyphCount::ZERO,
            DashPattern::new(1, 1),
            Some(Attr::FOREGROUND_RED),
            true,
        );
        assert_eq!(surface, before);
    }

    #[test]
    fn test_vertical_dotted_line() {
        let mut surface = GridSurface::new(3, 6);
        Painter::new(&mut surface).draw_vertical_dotted_line(
            '|',
            1,
            0,
            CellCount(6),
            GlyphCount(1),
            DashPattern::new(2, 1).with_phase(2),
            Some(Attr::FOREGROUND_GREEN),
            false,
        );
        let column: String = (0..6).map(|y| surface.get(1, y).unwrap().ch).collect();
        assert_eq!(column, " || ||");
        assert_eq!(surface.get(1, 0).unwrap().attr, Attr::DEFAULT);
        assert_eq!(surface.get(1, 1).unwrap().attr, Attr::FOREGROUND_GREEN);
    }

    #[test]
    fn test_vertical_wide_dotted_line_gaps_span_glyph() {
        let mut surface = GridSurface::new(4, 3);
        surface.fill(Cell::new('x', Attr::DEFAULT));
        Painter::new(&mut surface).draw_vertical_dotted_line(
            '中',
            1,
            0,
            CellCount(3),
            GlyphCount(1),
            DashPattern::new(1, 1),
            Some(Attr::UNDERSCORE),
            true,
        );
        assert_eq!(surface.row_text(0), "x中中x");
        assert_eq!(surface.row_text(1), "x  x");
        assert_eq!(surface.row_text(2), "x中中x");
        assert_eq!(surface.get(2, 1).unwrap().attr, Attr::UNDERSCORE);
        assert_eq!(surface.get(3, 1).unwrap().attr, Attr::DEFAULT);
    }

    #[test]
    fn test_thick_vertical_wide_dotted_line() {
        let mut surface = GridSurface::new(5, 3);
        surface.fill(Cell::new('x', Attr::DEFAULT));
        Painter::new(&mut surface).draw_vertical_dotted_line(
            '中',
            0,
            0,
            CellCount(3),
            GlyphCount(2),
            DashPattern::new(1, 1),
            None,
            false,
        );
        assert_eq!(surface.row_text(0), "中中中中x");
        assert_eq!(surface.row_text(1), "    x");
        assert_eq!(surface.row_text(2), "中中中中x");
    }
}
