//! Cell surfaces: the grids painters write into.
//!
//! [`CellSurface`] is the narrow contract the painters need from a host grid:
//! point reads plus three run writes. [`GridSurface`] is the in-memory
//! implementation used by [`SurfacePool`]; a host backed by a real console
//! screen buffer implements the trait over its own primitives.
//!
//! # Run semantics
//!
//! Run writes are linear. A run that passes the right edge continues at the
//! start of the next row, and a run that passes the last cell of the surface
//! is cut off there. Character runs count glyphs: a wide character written
//! `n` times covers `2n` cells, each of them holding the codepoint.
//!
//! ```
//! use gridswap::{Attr, CellCount, CellSurface, GlyphCount, GridSurface};
//!
//! let mut surface = GridSurface::new(4, 2);
//! surface.write_char_run(2, 0, '#', GlyphCount(4));
//! assert_eq!(surface.row_text(0), "  ##");
//! assert_eq!(surface.row_text(1), "##  ");
//!
//! surface.write_attr_run(0, 1, Attr::FOREGROUND_RED, CellCount(1));
//! assert_eq!(surface.get(0, 1).unwrap().attr, Attr::FOREGROUND_RED);
//! ```

mod pool;

pub use pool::{PoolOptions, SurfacePool};

use crate::attr::Attr;
use crate::cell::{BLANK, Cell, CellCount, GlyphCount};
use crate::unicode::{WidthMethod, is_line_break};

/// A fixed-size grid of character + attribute cells.
///
/// Coordinates are (x, y) with (0, 0) at the top-left. Implementations
/// define their own behavior for out-of-range coordinates; painters do
/// not check.
pub trait CellSurface {
    /// Width in cells.
    fn width(&self) -> u32;

    /// Height in cells.
    fn height(&self) -> u32;

    /// How this surface classifies wide characters when writing runs.
    fn width_method(&self) -> WidthMethod {
        WidthMethod::Threshold
    }

    /// Character stored at (x, y).
    fn read_char(&self, x: u32, y: u32) -> char;

    /// Write `count` copies of `ch` starting at (x, y).
    fn write_char_run(&mut self, x: u32, y: u32, ch: char, count: GlyphCount);

    /// Set the attribute of `count` cells starting at (x, y).
    fn write_attr_run(&mut self, x: u32, y: u32, attr: Attr, count: CellCount);

    /// Write `text` character by character starting at (x, y).
    fn write_raw(&mut self, x: u32, y: u32, text: &str);
}

/// In-memory cell surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSurface {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    width_method: WidthMethod,
}

impl GridSurface {
    /// Create a blank surface.
    ///
    /// Zero dimensions are clamped to 1.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Cell::blank())
    }

    /// Create a surface with every cell set to `fill`.
    #[must_use]
    pub fn filled(width: u32, height: u32, fill: Cell) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let size = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            cells: vec![fill; size],
            width_method: WidthMethod::Threshold,
        }
    }

    /// Use a different wide-character rule for run writes.
    #[must_use]
    pub fn with_width_method(mut self, method: WidthMethod) -> Self {
        self.width_method = method;
        self
    }

    /// Surface dimensions.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Linear index of (x, y), `None` when outside the grid.
    #[inline]
    fn cell_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        (y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(x as usize)
    }

    /// Cell at (x, y).
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<&Cell> {
        self.cell_index(x, y).map(|i| &self.cells[i])
    }

    /// Replace the cell at (x, y). Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, cell: Cell) {
        if let Some(i) = self.cell_index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Overwrite every cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Raw cell slice, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row `y` as one character per cell.
    ///
    /// A wide glyph shows up twice since both of its cells hold it.
    #[must_use]
    pub fn row_text(&self, y: u32) -> String {
        self.row(y).iter().map(|cell| cell.ch).collect()
    }

    /// Attributes of row `y`.
    #[must_use]
    pub fn row_attrs(&self, y: u32) -> Vec<Attr> {
        self.row(y).iter().map(|cell| cell.attr).collect()
    }

    fn row(&self, y: u32) -> &[Cell] {
        match self.cell_index(0, y) {
            Some(start) => &self.cells[start..start + self.width as usize],
            None => &[],
        }
    }

    /// Linear start index for a run; `None` when the start lies past the end.
    fn run_start(&self, x: u32, y: u32) -> Option<usize> {
        let start = (y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(x as usize)?;
        (start < self.cells.len()).then_some(start)
    }

    /// Put one glyph at linear index `pos`; returns the next index, or
    /// `None` once the surface is exhausted.
    fn put_glyph(&mut self, pos: usize, ch: char) -> Option<usize> {
        if self.width_method.is_wide(ch) {
            if pos + 1 >= self.cells.len() {
                return None;
            }
            self.cells[pos].ch = ch;
            self.cells[pos + 1].ch = ch;
            Some(pos + 2)
        } else {
            if pos >= self.cells.len() {
                return None;
            }
            self.cells[pos].ch = ch;
            Some(pos + 1)
        }
    }
}

impl Default for GridSurface {
    fn default() -> Self {
        Self::new(80, 25)
    }
}

impl CellSurface for GridSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn width_method(&self) -> WidthMethod {
        self.width_method
    }

    fn read_char(&self, x: u32, y: u32) -> char {
        self.get(x, y).map_or(BLANK, |cell| cell.ch)
    }

    fn write_char_run(&mut self, x: u32, y: u32, ch: char, count: GlyphCount) {
        let Some(mut pos) = self.run_start(x, y) else {
            return;
        };
        for _ in 0..count.get() {
            match self.put_glyph(pos, ch) {
                Some(next) => pos = next,
                None => break,
            }
        }
    }

    fn write_attr_run(&mut self, x: u32, y: u32, attr: Attr, count: CellCount) {
        let Some(start) = self.run_start(x, y) else {
            return;
        };
        let end = start
            .saturating_add(count.get() as usize)
            .min(self.cells.len());
        for cell in &mut self.cells[start..end] {
            cell.attr = attr;
        }
    }

    fn write_raw(&mut self, x: u32, y: u32, text: &str) {
        let Some(mut pos) = self.run_start(x, y) else {
            return;
        };
        for ch in text.chars() {
            if is_line_break(ch) {
                continue;
            }
            match self.put_glyph(pos, ch) {
                Some(next) => pos = next,
                None => break,
            }
        }
    }
}
