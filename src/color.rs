//! Pixel color operations for the monochrome framebuffer
//!
//! This module defines the [`PixelColor`] enum describing the three bit
//! operations the panel format can express.
//!
//! ## Color Representation
//!
//! The framebuffer packs one bit per pixel. A drawing operation either
//! clears the bit, sets it, or toggles whatever is there:
//!
//! | Color   | Bit operation |
//! |---------|---------------|
//! | Black   | clear (pixel off) |
//! | White   | set (pixel on)    |
//! | Inverse | toggle            |
//!
//! ## Example
//!
//! ```
//! use bmd31m090::PixelColor;
//!
//! assert_eq!(PixelColor::White.apply(0x00, 0x01), 0x01);
//! assert_eq!(PixelColor::Black.apply(0xFF, 0x01), 0xFE);
//! assert_eq!(PixelColor::Inverse.apply(0x01, 0x01), 0x00);
//! ```

/// Pixel colors supported by the monochrome panel
///
/// The controller has no representable state beyond on/off, so the only
/// third option is toggling the current value.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PixelColor {
    /// Pixel off (clears the framebuffer bit)
    Black,
    /// Pixel on (sets the framebuffer bit)
    White,
    /// Flip the pixel's current state
    Inverse,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for PixelColor {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU8;
}

impl PixelColor {
    /// Apply this color's bit operation to a framebuffer byte
    ///
    /// `mask` selects the bit for the target pixel within `byte`.
    ///
    /// ## Example
    ///
    /// ```
    /// use bmd31m090::PixelColor;
    ///
    /// let byte = PixelColor::White.apply(0x00, 0x80);
    /// assert_eq!(byte, 0x80);
    /// assert_eq!(PixelColor::Inverse.apply(byte, 0x80), 0x00);
    /// ```
    pub fn apply(self, byte: u8, mask: u8) -> u8 {
        match self {
            Self::Black => byte & !mask,
            Self::White => byte | mask,
            Self::Inverse => byte ^ mask,
        }
    }

    /// The opposite paint polarity, used for the off bits of an opaque blit
    ///
    /// Black and White swap; Inverse stays Inverse (a toggle is its own
    /// complement in an opaque two-tone blit).
    pub fn complement(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
            Self::Inverse => Self::Inverse,
        }
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for PixelColor {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        use embedded_graphics_core::pixelcolor::BinaryColor;
        match color {
            BinaryColor::Off => Self::Black,
            BinaryColor::On => Self::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_set_clear_toggle() {
        assert_eq!(PixelColor::White.apply(0x00, 0x04), 0x04);
        assert_eq!(PixelColor::Black.apply(0x04, 0x04), 0x00);
        assert_eq!(PixelColor::Inverse.apply(0x00, 0x04), 0x04);
        assert_eq!(PixelColor::Inverse.apply(0x04, 0x04), 0x00);
    }

    #[test]
    fn test_apply_leaves_other_bits() {
        assert_eq!(PixelColor::Black.apply(0xFF, 0x10), 0xEF);
        assert_eq!(PixelColor::White.apply(0xEF, 0x10), 0xFF);
    }

    #[test]
    fn test_complement() {
        assert_eq!(PixelColor::Black.complement(), PixelColor::White);
        assert_eq!(PixelColor::White.complement(), PixelColor::Black);
        assert_eq!(PixelColor::Inverse.complement(), PixelColor::Inverse);
    }
}
