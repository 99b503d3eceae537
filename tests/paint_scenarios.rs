//! End-to-end painting scenarios over pooled surfaces.
//!
//! Each test paints through the public API only and checks the exact cells
//! that end up on the surface.

use gridswap::{
    Attr, BLANK, Cell, CellCount, CellSurface, DashPattern, Error, GlyphCount, GridSurface,
    Painter, PoolOptions, Rect, SurfacePool, WidthMethod,
};

fn row(surface: &GridSurface, y: u32) -> String {
    surface.row_text(y)
}

// ============================================================================
// Overwrites
// ============================================================================

mod overwrites {
    use super::*;

    #[test]
    fn narrow_rect_over_narrow_rect() {
        let mut surface = GridSurface::filled(10, 1, Cell::new('.', Attr::DEFAULT));
        let mut painter = Painter::new(&mut surface);
        painter.fill_rect('A', 0, 0, GlyphCount(5), 1, None);
        painter.fill_rect('B', 2, 0, GlyphCount(2), 1, None);
        assert_eq!(row(&surface, 0), "AABBA.....");
    }

    #[test]
    fn narrow_over_trailing_half_blanks_leading_half() {
        let mut surface = GridSurface::new(10, 1);
        let mut painter = Painter::new(&mut surface);
        painter.paint_run('\u{4E2D}', 0, 0, GlyphCount(1), None);
        assert_eq!(painter.surface().read_char(0, 0), '\u{4E2D}');
        assert_eq!(painter.surface().read_char(1, 0), '\u{4E2D}');

        painter.paint_run('X', 1, 0, GlyphCount(1), None);
        assert_eq!(surface.read_char(0, 0), BLANK);
        assert_eq!(surface.read_char(1, 0), 'X');
        assert_eq!(row(&surface, 0), " X        ");
    }

    #[test]
    fn narrow_over_leading_half_blanks_trailing_half() {
        let mut surface = GridSurface::new(4, 1);
        let mut painter = Painter::new(&mut surface);
        painter.paint_run('\u{4E2D}', 0, 0, GlyphCount(1), None);
        painter.paint_run('X', 0, 0, GlyphCount(1), None);
        assert_eq!(row(&surface, 0), "X   ");
    }

    #[test]
    fn wide_rect_over_mixed_row() {
        let mut surface = GridSurface::new(8, 1);
        let mut painter = Painter::new(&mut surface);
        painter.paint_text("ab文文", 0, 0, None);
        painter.paint_run('中', 3, 0, GlyphCount(2), None);
        // Glyph 文 at 2-3 is cut at 3 and blanked whole.
        assert_eq!(row(&surface, 0), "ab 中中中中 ");
    }

    #[test]
    fn hollow_box_keeps_interior_text() {
        let mut surface = GridSurface::new(10, 4);
        let mut painter = Painter::new(&mut surface);
        painter.paint_text("inside", 2, 1, Some(Attr::FOREGROUND_GREEN));
        painter.fill_rect_hollow('*', 0, 0, GlyphCount(10), 4, Some(Attr::FOREGROUND_RED));
        assert_eq!(row(&surface, 0), "**********");
        assert_eq!(row(&surface, 1), "* inside *");
        assert_eq!(row(&surface, 2), "*        *");
        assert_eq!(row(&surface, 3), "**********");
        assert_eq!(surface.get(2, 1).unwrap().attr, Attr::FOREGROUND_GREEN);
        assert_eq!(surface.get(9, 1).unwrap().attr, Attr::FOREGROUND_RED);
    }
}

// ============================================================================
// Dotted lines
// ============================================================================

mod dotted {
    use super::*;

    #[test]
    fn phase_four_starts_in_the_gap() {
        // Cycle "---  "; phase 4 is the second gap cell.
        let mut surface = GridSurface::filled(10, 1, Cell::new('.', Attr::DEFAULT));
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
        assert_eq!(row(&surface, 0), " ---  --- ");
    }

    #[test]
    fn adjoining_segments_line_up() {
        let pattern = DashPattern::new(2, 2);
        let mut whole = GridSurface::new(12, 1);
        Painter::new(&mut whole).draw_dotted_line('=', 0, 0, CellCount(12), 1, pattern, None, false);

        let mut split = GridSurface::new(12, 1);
        let mut painter = Painter::new(&mut split);
        painter.draw_dotted_line('=', 0, 0, CellCount(5), 1, pattern, None, false);
        painter.draw_dotted_line('=', 5, 0, CellCount(7), 1, pattern.advanced(5), None, false);

        assert_eq!(whole, split);
        assert_eq!(row(&whole, 0), "==  ==  ==  ");
    }

    #[test]
    fn gap_attr_policy() {
        let mut surface = GridSurface::new(6, 2);
        let mut painter = Painter::new(&mut surface);
        painter.clear(BLANK, Some(Attr::BACKGROUND_BLUE));
        let pattern = DashPattern::new(1, 1);
        let red = Attr::FOREGROUND_RED;
        let blue = Attr::BACKGROUND_BLUE;
        painter.draw_dotted_line('+', 0, 0, CellCount(6), 1, pattern, Some(red), false);
        painter.draw_dotted_line('+', 0, 1, CellCount(6), 1, pattern, Some(red), true);

        assert_eq!(surface.row_attrs(0), vec![red, blue, red, blue, red, blue]);
        assert_eq!(surface.row_attrs(1), vec![red; 6]);
        assert_eq!(row(&surface, 0), "+ + + ");
        assert_eq!(row(&surface, 1), "+ + + ");
    }

    #[test]
    fn redraw_is_idempotent() {
        let mut once = GridSurface::new(9, 3);
        let pattern = DashPattern::new(2, 1).with_phase(1);
        let mut painter = Painter::new(&mut once);
        painter.draw_vertical_dotted_line(
            '│',
            4,
            0,
            CellCount(3),
            GlyphCount(1),
            pattern,
            Some(Attr::UNDERSCORE),
            true,
        );
        let snapshot = once.clone();
        Painter::new(&mut once).draw_vertical_dotted_line(
            '│',
            4,
            0,
            CellCount(3),
            GlyphCount(1),
            pattern,
            Some(Attr::UNDERSCORE),
            true,
        );
        assert_eq!(once, snapshot);
    }
}

// ============================================================================
// Viewport
// ============================================================================

mod viewport {
    use super::*;

    #[test]
    fn panel_with_scrolled_text() {
        let mut surface = GridSurface::new(12, 4);
        let mut view = Painter::new(&mut surface)
            .viewport(Rect::new(1, 0, 10, 4))
            .unwrap();
        view.fill_rect_hollow('#', 0, 0, CellCount(10), 4, None);
        let hidden = view.draw_string_rect("one two three", 1, 1, CellCount(8), 2, 0, None);
        assert_eq!(hidden, 0);
        assert_eq!(row(&surface, 0), " ########## ");
        assert_eq!(row(&surface, 1), " #one two # ");
        assert_eq!(row(&surface, 2), " #three   # ");
        assert_eq!(row(&surface, 3), " ########## ");
    }

    #[test]
    fn box_sliding_off_the_left_edge() {
        let mut surface = GridSurface::new(6, 3);
        let mut view = Painter::new(&mut surface)
            .viewport(Rect::of_size(6, 3))
            .unwrap();
        view.fill_rect_hollow('+', -3, 0, CellCount(6), 3, None);
        assert_eq!(row(&surface, 0), "+++   ");
        assert_eq!(row(&surface, 1), "  +   ");
        assert_eq!(row(&surface, 2), "+++   ");
    }

    #[test]
    fn view_must_overlap_surface() {
        let mut surface = GridSurface::new(4, 4);
        let result = Painter::new(&mut surface).viewport(Rect::new(0, -10, 4, 4));
        assert!(matches!(result, Err(Error::OutOfBounds { y: -10, .. })));
    }
}

// ============================================================================
// Pool
// ============================================================================

mod pool {
    use super::*;

    #[test]
    fn double_buffered_frames() {
        let mut pool = SurfacePool::new(PoolOptions::new(5, 1, 2)).unwrap();
        assert_eq!(pool.active(), 1);

        pool.back_painter().paint_text("one", 0, 0, None);
        assert_eq!(pool.present_back(), 0);
        assert_eq!(pool.active_surface().row_text(0), "one  ");

        pool.back_painter().paint_text("two", 0, 0, None);
        assert_eq!(pool.active_surface().row_text(0), "one  ");
        assert_eq!(pool.present_back(), 1);
        assert_eq!(pool.active_surface().row_text(0), "two  ");

        // Surface 0 comes back with its old frame.
        assert_eq!(pool.back_index(), 0);
        assert_eq!(pool.surface(0).unwrap().row_text(0), "one  ");
    }

    #[test]
    fn triple_buffering_cycles() {
        let mut pool = SurfacePool::new(PoolOptions::new(2, 2, 3)).unwrap();
        let order: Vec<usize> = (0..6).map(|_| pool.present_back()).collect();
        assert_eq!(order, vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn east_asian_pool_keeps_box_drawing_narrow() {
        let options = PoolOptions::new(6, 3, 2).with_width_method(WidthMethod::EastAsian);
        let mut pool = SurfacePool::new(options).unwrap();
        let mut painter = pool.back_painter();
        painter.fill_rect_hollow('─', 0, 0, GlyphCount(6), 3, None);
        let back = pool.back_index();
        assert_eq!(pool.surface(back).unwrap().row_text(0), "──────");
        assert_eq!(pool.surface(back).unwrap().row_text(1), "─    ─");
    }

    #[test]
    fn bad_index_is_an_error() {
        let mut pool = SurfacePool::new(PoolOptions::default()).unwrap();
        assert_eq!(
            pool.present(2).unwrap_err(),
            Error::SurfaceIndex { index: 2, count: 2 }
        );
        assert!(pool.painter(5).is_err());
    }
}
