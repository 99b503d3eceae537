//! Fuzz target for clipped painting.
//!
//! Runs arbitrary sequences of viewport operations with arbitrary signed
//! geometry. Nothing may panic, and no row may be left holding half of a
//! wide glyph.

#![no_main]

use arbitrary::Arbitrary;
use gridswap::{
    Attr, CellCount, CellSurface, DashPattern, GlyphCount, GridSurface, Painter, Rect, is_wide,
};
use libfuzzer_sys::fuzz_target;

/// Structured input: a surface, a view into it, and operations on the view.
#[derive(Arbitrary, Debug)]
struct Frame {
    width: u8,
    height: u8,
    view: (i8, i8, u8, u8),
    ops: Vec<Op>,
}

#[derive(Arbitrary, Debug)]
enum Op {
    Fill {
        ch: char,
        x: i8,
        y: i8,
        w: u8,
        h: u8,
        attr: Option<u16>,
    },
    Hollow {
        ch: char,
        x: i8,
        y: i8,
        w: u8,
        h: u8,
        attr: Option<u16>,
    },
    Modify {
        attr: u16,
        x: i8,
        y: i8,
        w: u8,
        h: u8,
    },
    Line {
        text: String,
        x: i8,
        y: i8,
        max_width: u8,
        offset: u8,
    },
    Wrapped {
        text: String,
        x: i8,
        y: i8,
        max_width: u8,
        max_height: u8,
        offset: u8,
    },
    Dotted {
        ch: char,
        x: i8,
        y: i8,
        span: u8,
        thickness: u8,
        line: u8,
        air: u8,
        phase: u8,
        vertical: bool,
        attr_on_gaps: bool,
    },
}

fn attr(raw: Option<u16>) -> Option<Attr> {
    raw.map(Attr::from_raw)
}

fn wide_runs_are_paired(surface: &GridSurface) -> bool {
    (0..surface.height()).all(|y| {
        let mut run = 0u32;
        for x in 0..surface.width() {
            if is_wide(surface.read_char(x, y)) {
                run += 1;
            } else if run % 2 != 0 {
                return false;
            } else {
                run = 0;
            }
        }
        run % 2 == 0
    })
}

fuzz_target!(|frame: Frame| {
    let width = u32::from(frame.width % 64) + 1;
    let height = u32::from(frame.height % 32) + 1;
    let mut surface = GridSurface::new(width, height);

    let (vx, vy, vw, vh) = frame.view;
    let rect = Rect::new(i32::from(vx), i32::from(vy), u32::from(vw), u32::from(vh));
    let Ok(mut view) = Painter::new(&mut surface).viewport(rect) else {
        return;
    };

    for op in frame.ops.into_iter().take(64) {
        match op {
            Op::Fill { ch, x, y, w, h, attr: a } => {
                view.fill_rect(ch, x.into(), y.into(), CellCount(w.into()), h.into(), attr(a));
            }
            Op::Hollow { ch, x, y, w, h, attr: a } => {
                view.fill_rect_hollow(ch, x.into(), y.into(), CellCount(w.into()), h.into(), attr(a));
            }
            Op::Modify { attr: a, x, y, w, h } => {
                view.modify_rect(Attr::from_raw(a), x.into(), y.into(), CellCount(w.into()), h.into());
            }
            Op::Line { text, x, y, max_width, offset } => {
                let _ = view.draw_string_line(
                    &text,
                    x.into(),
                    y.into(),
                    CellCount(max_width.into()),
                    offset.into(),
                    None,
                );
            }
            Op::Wrapped { text, x, y, max_width, max_height, offset } => {
                let _ = view.draw_string_rect(
                    &text,
                    x.into(),
                    y.into(),
                    CellCount(max_width.into()),
                    max_height.into(),
                    offset.into(),
                    None,
                );
            }
            Op::Dotted { ch, x, y, span, thickness, line, air, phase, vertical, attr_on_gaps } => {
                let pattern = DashPattern::new(line.into(), air.into());
                let pattern = pattern.advanced(phase.into());
                let span = CellCount(span.into());
                let thickness = u32::from(thickness % 8);
                if vertical {
                    let glyphs = GlyphCount(thickness);
                    view.draw_vertical_dotted_line(ch, x.into(), y.into(), span, glyphs, pattern, None, attr_on_gaps);
                } else {
                    view.draw_dotted_line(ch, x.into(), y.into(), span, thickness, pattern, None, attr_on_gaps);
                }
            }
        }
    }

    assert!(wide_runs_are_paired(&surface));
});
