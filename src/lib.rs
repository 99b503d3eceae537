//! `gridswap` - multi-buffered character grid rendering with wide glyphs
//!
//! A pool of fixed-size character + attribute grids, one of which is shown
//! while the others are painted. Painting works in console terms: runs of a
//! repeated character, attribute runs, rectangles, solid and dotted lines,
//! and raw text. Wide (double-cell) characters are handled throughout: a
//! write never leaves half of a wide glyph on screen.
//!
//! # Quick start
//!
//! ```
//! use gridswap::{Attr, CellCount, DashPattern, GlyphCount, PoolOptions, Rect, SurfacePool};
//!
//! let mut pool = SurfacePool::new(PoolOptions::new(20, 5, 2))?;
//!
//! let mut painter = pool.back_painter();
//! painter.clear(' ', Some(Attr::DEFAULT));
//! painter.fill_rect_hollow('#', 0, 0, GlyphCount(20), 5, Some(Attr::FOREGROUND_GREEN));
//! painter.draw_dotted_line('-', 1, 2, CellCount(18), 1, DashPattern::new(2, 1), None, false);
//!
//! let mut view = painter.viewport(Rect::new(1, 1, 18, 3))?;
//! view.draw_string_line("score: 120", 0, 0, CellCount(18), 0, None);
//!
//! let shown = pool.present_back();
//! assert_eq!(pool.active(), shown);
//! assert_eq!(pool.active_surface().row_text(1), "#score: 120        #");
//! # Ok::<(), gridswap::Error>(())
//! ```

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Clipped coordinates are non-negative
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow SurfacePool in surface etc
#![allow(clippy::missing_errors_doc)] // Error cases are listed on Error
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod attr;
pub mod cell;
pub mod error;
pub mod event;
pub mod paint;
pub mod surface;
pub mod unicode;

// Re-export core types at crate root
pub use attr::Attr;
pub use cell::{BLANK, Cell, CellCount, GlyphCount};
pub use error::{Error, Result};
pub use event::{
    EVENT_PRESENT, LogLevel, clear_event_callback, clear_log_callback, emit_event, emit_log,
    set_event_callback, set_log_callback,
};

// Re-export painting types
pub use paint::{DashPattern, Painter, Rect, Viewport};

// Re-export surfaces
pub use surface::{CellSurface, GridSurface, PoolOptions, SurfacePool};
pub use unicode::{WidthMethod, cells_per_char, is_wide, text_width};
