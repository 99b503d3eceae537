//! Console cell attributes.
//!
//! An [`Attr`] is the opaque style token stored next to every character in a
//! [`GridSurface`](crate::surface::GridSurface): foreground and background
//! color bits, intensity, and the handful of grid/underline flags a console
//! screen buffer understands.
//!
//! Painting APIs take `Option<Attr>`. `None` means "leave the attribute that
//! is already in the cell alone", which is how callers draw characters over
//! an existing color scheme without disturbing it.
//!
//! # Examples
//!
//! ```
//! use gridswap::Attr;
//!
//! let warning = Attr::FOREGROUND_RED | Attr::FOREGROUND_GREEN | Attr::FOREGROUND_INTENSITY;
//! assert_eq!(warning.bits(), 0x0E);
//! assert_eq!(warning.foreground(), 0x0E);
//! assert_eq!(warning.background(), 0);
//! ```

use bitflags::bitflags;

bitflags! {
    /// Console color and style bits.
    ///
    /// Bits outside the named flags are kept as-is so the token can carry
    /// whatever the host surface understands.
    #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
    pub struct Attr: u16 {
        const FOREGROUND_BLUE      = 0x0001;
        const FOREGROUND_GREEN     = 0x0002;
        const FOREGROUND_RED       = 0x0004;
        const FOREGROUND_INTENSITY = 0x0008;
        const BACKGROUND_BLUE      = 0x0010;
        const BACKGROUND_GREEN     = 0x0020;
        const BACKGROUND_RED       = 0x0040;
        const BACKGROUND_INTENSITY = 0x0080;
        /// Leading half of a double-byte glyph.
        const LEADING_BYTE         = 0x0100;
        /// Trailing half of a double-byte glyph.
        const TRAILING_BYTE        = 0x0200;
        /// Top grid line.
        const GRID_HORIZONTAL      = 0x0400;
        /// Left grid line.
        const GRID_LVERTICAL       = 0x0800;
        /// Right grid line.
        const GRID_RVERTICAL       = 0x1000;
        /// Swapped foreground/background.
        const REVERSE_VIDEO        = 0x4000;
        const UNDERSCORE           = 0x8000;

        const FOREGROUND_WHITE = Self::FOREGROUND_BLUE.bits()
            | Self::FOREGROUND_GREEN.bits()
            | Self::FOREGROUND_RED.bits()
            | Self::FOREGROUND_INTENSITY.bits();
        const BACKGROUND_WHITE = Self::BACKGROUND_BLUE.bits()
            | Self::BACKGROUND_GREEN.bits()
            | Self::BACKGROUND_RED.bits()
            | Self::BACKGROUND_INTENSITY.bits();

        const _ = !0;
    }
}

impl Attr {
    /// Mask of the four foreground bits.
    pub const FOREGROUND_MASK: u16 = 0x000F;
    /// Mask of the four background bits.
    pub const BACKGROUND_MASK: u16 = 0x00F0;

    /// Plain light-gray text on black, the attribute of a fresh console.
    pub const DEFAULT: Attr = Attr::from_bits_retain(0x0007);

    /// Wrap a raw attribute word.
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self::from_bits_retain(raw)
    }

    /// Foreground nibble (0-15).
    #[must_use]
    pub const fn foreground(self) -> u16 {
        self.bits() & Self::FOREGROUND_MASK
    }

    /// Background nibble shifted down to 0-15.
    #[must_use]
    pub const fn background(self) -> u16 {
        (self.bits() & Self::BACKGROUND_MASK) >> 4
    }

    /// Build an attribute from foreground and background nibbles.
    #[must_use]
    pub const fn from_colors(fg: u16, bg: u16) -> Self {
        Self::from_bits_retain((fg & Self::FOREGROUND_MASK) | ((bg << 4) & Self::BACKGROUND_MASK))
    }

    /// Replace the foreground nibble, keeping everything else.
    #[must_use]
    pub const fn with_foreground(self, fg: u16) -> Self {
        Self::from_bits_retain((self.bits() & !Self::FOREGROUND_MASK) | (fg & Self::FOREGROUND_MASK))
    }

    /// Replace the background nibble, keeping everything else.
    #[must_use]
    pub const fn with_background(self, bg: u16) -> Self {
        Self::from_bits_retain(
            (self.bits() & !Self::BACKGROUND_MASK) | ((bg << 4) & Self::BACKGROUND_MASK),
        )
    }
}

impl Default for Attr {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u16> for Attr {
    fn from(raw: u16) -> Self {
        Self::from_raw(raw)
    }
}
