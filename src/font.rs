//! Bitmap font table decoding
//!
//! A font table is an opaque byte array: byte 0 is the glyph width in
//! pixels, byte 1 the glyph height, followed by bitmaps for the 96
//! printable ASCII characters (32..=127). Each glyph occupies
//! `width * pages_per_glyph` bytes in column-major, page-major order — the
//! same layout the controller consumes, so glyph page rows are streamed to
//! the panel verbatim.
//!
//! Tables themselves ship with the application; the driver only decodes
//! them. The font in use is an explicit handle installed with
//! [`Display::set_font`](crate::Display::set_font), never hidden global
//! state, so independent display instances can carry different fonts.
//!
//! ## Example
//!
//! ```
//! use bmd31m090::Font;
//!
//! // A minimal 1x8 table: header + 96 one-byte glyphs.
//! let mut table = [0u8; 2 + 96];
//! table[0] = 1; // width
//! table[1] = 8; // height
//! let font = match Font::new(&table) {
//!     Ok(font) => font,
//!     Err(_) => return,
//! };
//! assert_eq!(font.pages_per_glyph(), 1);
//! ```

use crate::error::FontError;

/// First character code covered by a font table
pub const GLYPH_FIRST: u8 = 32;

/// Last character code covered by a font table
pub const GLYPH_LAST: u8 = 127;

/// Number of glyphs in a table
pub const GLYPH_COUNT: usize = (GLYPH_LAST - GLYPH_FIRST) as usize + 1;

/// Length of the width/height header preceding the glyph data
pub const HEADER_LEN: usize = 2;

/// A validated read-only font table
#[derive(Clone, Copy, Debug)]
pub struct Font<'a> {
    /// The raw table, header included
    data: &'a [u8],
    /// Glyph width in pixels, from the header
    width: u8,
    /// Glyph height in pixels, from the header
    height: u8,
}

impl<'a> Font<'a> {
    /// Wrap and validate a font table
    ///
    /// # Errors
    ///
    /// Returns [`FontError::TableTooShort`] if the table cannot hold the
    /// header plus 96 glyphs of the declared size, and
    /// [`FontError::ZeroGlyphSize`] if the header declares a zero width or
    /// height.
    pub fn new(data: &'a [u8]) -> Result<Self, FontError> {
        if data.len() < HEADER_LEN {
            return Err(FontError::TableTooShort {
                expected: HEADER_LEN,
                provided: data.len(),
            });
        }
        let width = data[0];
        let height = data[1];
        if width == 0 || height == 0 {
            return Err(FontError::ZeroGlyphSize);
        }
        let pages = (height as usize + 7) / 8;
        let expected = HEADER_LEN + GLYPH_COUNT * width as usize * pages;
        if data.len() < expected {
            return Err(FontError::TableTooShort {
                expected,
                provided: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Glyph width in pixels
    pub fn glyph_width(&self) -> u8 {
        self.width
    }

    /// Glyph height in pixels
    pub fn glyph_height(&self) -> u8 {
        self.height
    }

    /// 8-pixel pages per glyph, rounding a fractional final page up
    pub fn pages_per_glyph(&self) -> u8 {
        ((u16::from(self.height) + 7) / 8) as u8
    }

    /// Look up a glyph by character code
    ///
    /// Codes outside the printable range (32..=127) yield the space glyph.
    pub fn glyph(&self, code: u8) -> Glyph<'a> {
        let code = if (GLYPH_FIRST..=GLYPH_LAST).contains(&code) {
            code
        } else {
            b' '
        };
        let bytes_per_glyph = self.width as usize * self.pages_per_glyph() as usize;
        let start = HEADER_LEN + (code - GLYPH_FIRST) as usize * bytes_per_glyph;
        Glyph {
            data: self.data.get(start..start + bytes_per_glyph).unwrap_or(&[]),
            width: self.width,
        }
    }
}

/// One character's bitmap within a font table
#[derive(Clone, Copy, Debug)]
pub struct Glyph<'a> {
    /// Column-major, page-major glyph bytes
    data: &'a [u8],
    /// Glyph width in pixels
    width: u8,
}

impl<'a> Glyph<'a> {
    /// Glyph width in pixels (bytes per page row)
    pub fn width(&self) -> u8 {
        self.width
    }

    /// The `width` column bytes of one 8-pixel page band
    ///
    /// Returns an empty slice for a page past the glyph's height.
    pub fn page_row(&self, page: u8) -> &'a [u8] {
        let start = self.width as usize * page as usize;
        self.data.get(start..start + self.width as usize).unwrap_or(&[])
    }
}
