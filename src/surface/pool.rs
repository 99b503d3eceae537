//! Pool of pre-allocated surfaces with an active (visible) index.
//!
//! Painting goes into a back surface while the active one is on screen;
//! [`SurfacePool::present`] then flips which index is visible in one step,
//! so a half-painted frame is never shown.
//!
//! The pool starts with the *last* surface active, which makes surface 0 the
//! first back surface:
//!
//! ```
//! use gridswap::{GlyphCount, PoolOptions, SurfacePool};
//!
//! let mut pool = SurfacePool::new(PoolOptions::default())?;
//! assert_eq!(pool.active(), 1);
//! assert_eq!(pool.back_index(), 0);
//!
//! pool.back_painter().fill_rect('#', 0, 0, GlyphCount(3), 1, None);
//! let shown = pool.present_back();
//! assert_eq!(shown, 0);
//! assert_eq!(pool.active_surface().row_text(0).trim_end(), "###");
//! # Ok::<(), gridswap::Error>(())
//! ```

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::event::{EVENT_PRESENT, LogLevel, emit_event, emit_log};
use crate::paint::Painter;
use crate::surface::GridSurface;
use crate::unicode::WidthMethod;

/// Pool construction options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolOptions {
    /// Width of every surface, in cells.
    pub width: u32,
    /// Height of every surface, in cells.
    pub height: u32,
    /// Number of surfaces to allocate.
    pub surfaces: usize,
    /// Wide-character rule shared by every surface.
    pub width_method: WidthMethod,
    /// Initial content of every cell.
    pub fill: Cell,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            width: 80,
            height: 25,
            surfaces: 2,
            width_method: WidthMethod::Threshold,
            fill: Cell::blank(),
        }
    }
}

impl PoolOptions {
    /// Options for `surfaces` surfaces of `width` x `height`.
    #[must_use]
    pub fn new(width: u32, height: u32, surfaces: usize) -> Self {
        Self {
            width,
            height,
            surfaces,
            ..Self::default()
        }
    }

    /// Use a different wide-character rule.
    #[must_use]
    pub fn with_width_method(mut self, method: WidthMethod) -> Self {
        self.width_method = method;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.surfaces == 0 {
            return Err(Error::InvalidSurfaceCount(self.surfaces));
        }
        Ok(())
    }
}

/// Fixed set of equally sized surfaces, addressed by index.
#[derive(Clone, Debug)]
pub struct SurfacePool {
    surfaces: Vec<GridSurface>,
    active: usize,
    width: u32,
    height: u32,
}

impl SurfacePool {
    /// Allocate every surface up front.
    pub fn new(options: PoolOptions) -> Result<Self> {
        options.validate()?;
        let surface = GridSurface::filled(options.width, options.height, options.fill)
            .with_width_method(options.width_method);
        let surfaces = vec![surface; options.surfaces];
        emit_log(
            LogLevel::Debug,
            &format!(
                "allocated {} surfaces of {}x{}",
                options.surfaces, options.width, options.height
            ),
        );
        Ok(Self {
            active: surfaces.len() - 1,
            surfaces,
            width: options.width,
            height: options.height,
        })
    }

    /// Number of surfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Always false; a pool holds at least one surface.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Dimensions shared by every surface.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Index of the visible surface.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Index of the surface that follows the active one.
    ///
    /// With a single surface this is the active surface itself.
    #[must_use]
    pub fn back_index(&self) -> usize {
        (self.active + 1) % self.surfaces.len()
    }

    fn check(&self, index: usize) -> Result<usize> {
        if index < self.surfaces.len() {
            Ok(index)
        } else {
            Err(Error::SurfaceIndex {
                index,
                count: self.surfaces.len(),
            })
        }
    }

    /// Surface at `index`.
    pub fn surface(&self, index: usize) -> Result<&GridSurface> {
        let index = self.check(index)?;
        Ok(&self.surfaces[index])
    }

    /// Mutable surface at `index`.
    pub fn surface_mut(&mut self, index: usize) -> Result<&mut GridSurface> {
        let index = self.check(index)?;
        Ok(&mut self.surfaces[index])
    }

    /// The visible surface.
    #[must_use]
    pub fn active_surface(&self) -> &GridSurface {
        &self.surfaces[self.active]
    }

    /// Painter over the surface at `index`.
    pub fn painter(&mut self, index: usize) -> Result<Painter<'_, GridSurface>> {
        self.surface_mut(index).map(Painter::new)
    }

    /// Painter over the back surface.
    pub fn back_painter(&mut self) -> Painter<'_, GridSurface> {
        let index = self.back_index();
        Painter::new(&mut self.surfaces[index])
    }

    /// Make the surface at `index` the visible one.
    ///
    /// The surface keeps its content; the next frame painted into it starts
    /// from whatever it showed last time.
    pub fn present(&mut self, index: usize) -> Result<()> {
        let index = self.check(index)?;
        if index == self.active && self.surfaces.len() > 1 {
            emit_log(
                LogLevel::Warn,
                &format!("surface {index} presented while already active"),
            );
        }
        self.active = index;
        emit_event(EVENT_PRESENT, &index.to_string());
        Ok(())
    }

    /// Present the back surface and return its index.
    pub fn present_back(&mut self) -> usize {
        let index = self.back_index();
        self.active = index;
        emit_event(EVENT_PRESENT, &index.to_string());
        index
    }
}
