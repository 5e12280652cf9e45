//! In-memory 1-bit framebuffer and drawing primitives
//!
//! The framebuffer mirrors the controller's RAM layout: bytes are organized
//! in horizontal 8-pixel-tall pages, so pixel `(x, y)` lives in byte
//! `x + (y / 8) * width` at bit `y & 7`. Drawing mutates host memory only;
//! nothing reaches the panel until
//! [`Display::flush`](crate::Display::flush).
//!
//! Out-of-bounds pixel writes are silently dropped. Bitmap blits may hang
//! off any edge and are clipped per destination pixel.
//!
//! ## Example
//!
//! ```
//! use bmd31m090::{Dimensions, Framebuffer, PixelColor};
//!
//! let dims = match Dimensions::new(128, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let mut fb = Framebuffer::new(dims);
//! fb.draw_line(0, 0, 127, 63, PixelColor::White);
//! assert_eq!(fb.pixel(0, 0), Some(true));
//! ```

use crate::color::PixelColor;
use crate::config::Dimensions;
use crate::error::{MAX_HEIGHT, MAX_WIDTH};

/// Backing storage size, sized for the controller maximum (128x64 / 8)
pub const BUFFER_CAPACITY: usize = MAX_WIDTH as usize * (MAX_HEIGHT as usize / 8);

/// Fixed-capacity 1-bit-per-pixel framebuffer
///
/// Allocated once at construction; only the first
/// [`Dimensions::buffer_size`] bytes are active. The buffer persists across
/// flushes and is only zeroed by [`clear`](Self::clear).
pub struct Framebuffer {
    /// Page-organized pixel storage
    buffer: [u8; BUFFER_CAPACITY],
    /// Active display geometry
    dimensions: Dimensions,
}

impl Framebuffer {
    /// Create a zeroed framebuffer for the given geometry
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            buffer: [0x00; BUFFER_CAPACITY],
            dimensions,
        }
    }

    /// Display geometry this buffer is laid out for
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// The active bytes, in the raster order the controller expects
    pub fn bytes(&self) -> &[u8] {
        &self.buffer[..self.dimensions.buffer_size()]
    }

    /// Set every pixel to off
    pub fn clear(&mut self) {
        let len = self.dimensions.buffer_size();
        self.buffer[..len].fill(0x00);
    }

    /// Set, clear, or invert a single pixel
    ///
    /// Writes outside the display bounds are ignored.
    pub fn set_pixel(&mut self, x: u8, y: u8, color: PixelColor) {
        if x >= self.dimensions.width || y >= self.dimensions.height {
            return;
        }
        let index = x as usize + (y as usize / 8) * self.dimensions.width as usize;
        let mask = 1 << (y & 7);
        self.buffer[index] = color.apply(self.buffer[index], mask);
    }

    /// Read back a pixel; `None` outside the display bounds
    pub fn pixel(&self, x: u8, y: u8) -> Option<bool> {
        if x >= self.dimensions.width || y >= self.dimensions.height {
            return None;
        }
        let index = x as usize + (y as usize / 8) * self.dimensions.width as usize;
        Some(self.buffer[index] & (1 << (y & 7)) != 0)
    }

    /// Draw a 1-pixel-wide line between two points
    ///
    /// Integer Bresenham: the major axis is iterated with unit steps
    /// (transposing when the line is steep), the minor coordinate advances
    /// when the accumulated error crosses zero. Reversing the endpoints
    /// produces the identical pixel set.
    pub fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, color: PixelColor) {
        let steep = y1.abs_diff(y0) > x1.abs_diff(x0);

        let (mut x0, mut y0, mut x1, mut y1) = if steep {
            (y0, x0, y1, x1)
        } else {
            (x0, y0, x1, y1)
        };
        if x0 > x1 {
            core::mem::swap(&mut x0, &mut x1);
            core::mem::swap(&mut y0, &mut y1);
        }

        let dx = i16::from(x1 - x0);
        let dy = i16::from(y1.abs_diff(y0));
        let mut err = dx / 2;
        let y_step: i16 = if y0 < y1 { 1 } else { -1 };
        let mut y = i16::from(y0);

        for x in x0..=x1 {
            if steep {
                self.set_pixel(y as u8, x, color);
            } else {
                self.set_pixel(x, y as u8, color);
            }
            err -= dy;
            if err < 0 {
                y += y_step;
                err += dx;
            }
        }
    }

    /// Draw a horizontal line of `width` pixels starting at `(x, y)`
    pub fn draw_hline(&mut self, x: u8, y: u8, width: u8, color: PixelColor) {
        if width == 0 {
            return;
        }
        self.draw_line(x, y, x.saturating_add(width - 1), y, color);
    }

    /// Draw a vertical line of `height` pixels starting at `(x, y)`
    pub fn draw_vline(&mut self, x: u8, y: u8, height: u8, color: PixelColor) {
        if height == 0 {
            return;
        }
        self.draw_line(x, y, x, y.saturating_add(height - 1), color);
    }

    /// Blit a packed 1-bit bitmap with its top-left corner at `(x, y)`
    ///
    /// `data` is row-major, MSB-first, each row padded to a whole byte
    /// (`ceil(width / 8)` bytes per row). The blit is opaque: set source
    /// bits paint `color`, clear source bits paint its
    /// [`complement`](PixelColor::complement), so for `Inverse` every
    /// covered pixel toggles. Destination pixels outside the display are
    /// clipped; missing source bytes read as zero.
    pub fn draw_bitmap(&mut self, x: i16, y: i16, data: &[u8], width: u8, height: u8, color: PixelColor) {
        let row_bytes = (width as usize + 7) / 8;

        for j in 0..i16::from(height) {
            for i in 0..i16::from(width) {
                let py = y + j;
                let px = x + i;
                if px < 0
                    || py < 0
                    || px >= i16::from(self.dimensions.width)
                    || py >= i16::from(self.dimensions.height)
                {
                    continue;
                }

                let src = j as usize * row_bytes + i as usize / 8;
                let bit_set =
                    data.get(src).copied().unwrap_or(0) & (0x80 >> (i as usize % 8)) != 0;

                let paint = if bit_set { color } else { color.complement() };
                self.set_pixel(px as u8, py as u8, paint);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_framebuffer() -> Framebuffer {
        Framebuffer::new(Dimensions::new(128, 64).unwrap())
    }

    /// Collect the coordinates of every lit pixel.
    fn lit_pixels(fb: &Framebuffer) -> alloc::vec::Vec<(u8, u8)> {
        let dims = fb.dimensions();
        let mut lit = alloc::vec::Vec::new();
        for y in 0..dims.height {
            for x in 0..dims.width {
                if fb.pixel(x, y) == Some(true) {
                    lit.push((x, y));
                }
            }
        }
        lit
    }

    #[test]
    fn test_set_then_clear_restores_pixel() {
        let mut fb = test_framebuffer();
        fb.set_pixel(10, 20, PixelColor::White);
        assert_eq!(fb.pixel(10, 20), Some(true));
        fb.set_pixel(10, 20, PixelColor::Black);
        assert_eq!(fb.pixel(10, 20), Some(false));
    }

    #[test]
    fn test_double_inverse_is_identity() {
        let mut fb = test_framebuffer();
        fb.set_pixel(5, 5, PixelColor::White);
        fb.set_pixel(5, 5, PixelColor::Inverse);
        fb.set_pixel(5, 5, PixelColor::Inverse);
        assert_eq!(fb.pixel(5, 5), Some(true));

        fb.set_pixel(6, 6, PixelColor::Inverse);
        fb.set_pixel(6, 6, PixelColor::Inverse);
        assert_eq!(fb.pixel(6, 6), Some(false));
    }

    #[test]
    fn test_clear_turns_every_pixel_off() {
        let mut fb = test_framebuffer();
        fb.draw_line(0, 0, 127, 63, PixelColor::White);
        fb.clear();
        assert!(lit_pixels(&fb).is_empty());
    }

    #[test]
    fn test_out_of_bounds_write_is_ignored() {
        let mut fb = Framebuffer::new(Dimensions::new(64, 32).unwrap());
        fb.set_pixel(64, 0, PixelColor::White);
        fb.set_pixel(0, 32, PixelColor::White);
        fb.set_pixel(255, 255, PixelColor::White);
        assert!(lit_pixels(&fb).is_empty());
        assert_eq!(fb.pixel(64, 0), None);
    }

    #[test]
    fn test_degenerate_line_sets_single_pixel() {
        let mut fb = test_framebuffer();
        fb.draw_line(0, 0, 0, 0, PixelColor::White);
        assert_eq!(lit_pixels(&fb), alloc::vec![(0, 0)]);
    }

    #[test]
    fn test_horizontal_line() {
        let mut fb = test_framebuffer();
        fb.draw_line(0, 0, 7, 0, PixelColor::White);
        let expected: alloc::vec::Vec<(u8, u8)> = (0..=7).map(|x| (x, 0)).collect();
        assert_eq!(lit_pixels(&fb), expected);
    }

    #[test]
    fn test_diagonal_line() {
        let mut fb = test_framebuffer();
        fb.draw_line(0, 0, 3, 3, PixelColor::White);
        assert_eq!(lit_pixels(&fb), alloc::vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_line_endpoint_symmetry() {
        let cases = [(3u8, 17u8, 90u8, 2u8), (0, 0, 12, 63), (7, 60, 100, 5)];
        for (x0, y0, x1, y1) in cases {
            let mut forward = test_framebuffer();
            let mut reverse = test_framebuffer();
            forward.draw_line(x0, y0, x1, y1, PixelColor::White);
            reverse.draw_line(x1, y1, x0, y0, PixelColor::White);
            assert_eq!(lit_pixels(&forward), lit_pixels(&reverse));
        }
    }

    #[test]
    fn test_steep_line_connected() {
        let mut fb = test_framebuffer();
        fb.draw_line(10, 0, 12, 40, PixelColor::White);
        // One pixel per major-axis (y) step.
        assert_eq!(lit_pixels(&fb).len(), 41);
    }

    #[test]
    fn test_hline_vline_wrappers() {
        let mut fb = test_framebuffer();
        fb.draw_hline(4, 9, 5, PixelColor::White);
        fb.draw_vline(60, 10, 4, PixelColor::White);
        let lit = lit_pixels(&fb);
        assert_eq!(lit.len(), 9);
        for x in 4..9 {
            assert!(lit.contains(&(x, 9)));
        }
        for y in 10..14 {
            assert!(lit.contains(&(60, y)));
        }
    }

    #[test]
    fn test_bitmap_white_blit_is_opaque() {
        let mut fb = test_framebuffer();
        let solid = [0xFFu8; 8]; // 8x8, every bit set
        fb.draw_bitmap(2, 3, &solid, 8, 8, PixelColor::White);
        let lit = lit_pixels(&fb);
        assert_eq!(lit.len(), 64);
        for j in 0..8u8 {
            for i in 0..8u8 {
                assert!(lit.contains(&(2 + i, 3 + j)));
            }
        }
    }

    #[test]
    fn test_bitmap_black_blit_clears_block() {
        let mut fb = test_framebuffer();
        // Pre-light a larger area, then stamp a solid bitmap in Black.
        for y in 0..12 {
            fb.draw_hline(0, y, 12, PixelColor::White);
        }
        let solid = [0xFFu8; 8];
        fb.draw_bitmap(0, 0, &solid, 8, 8, PixelColor::Black);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(fb.pixel(x, y), Some(false));
            }
        }
        // Surroundings untouched.
        assert_eq!(fb.pixel(8, 0), Some(true));
        assert_eq!(fb.pixel(0, 8), Some(true));
    }

    #[test]
    fn test_bitmap_clear_source_bits_paint_complement() {
        let mut fb = test_framebuffer();
        let empty = [0x00u8; 8];
        fb.draw_bitmap(0, 0, &empty, 8, 8, PixelColor::White);
        // Opaque blit: off source bits paint Black over an off background.
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(fb.pixel(x, y), Some(false));
            }
        }

        fb.draw_bitmap(0, 0, &empty, 8, 8, PixelColor::Black);
        // color=Black, bit off -> White.
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(fb.pixel(x, y), Some(true));
            }
        }
    }

    #[test]
    fn test_bitmap_inverse_toggles_every_covered_pixel() {
        let mut fb = test_framebuffer();
        fb.set_pixel(0, 0, PixelColor::White);
        let pattern = [0xF0u8; 1]; // 4 set, 4 clear in one row
        fb.draw_bitmap(0, 0, &pattern, 8, 1, PixelColor::Inverse);
        assert_eq!(fb.pixel(0, 0), Some(false)); // was on, toggled off
        assert_eq!(fb.pixel(4, 0), Some(true)); // was off, toggled on
    }

    #[test]
    fn test_bitmap_partially_out_of_bounds_clips() {
        let mut fb = test_framebuffer();
        let solid = [0xFFu8; 8];
        fb.draw_bitmap(-4, -4, &solid, 8, 8, PixelColor::White);
        let lit = lit_pixels(&fb);
        assert_eq!(lit.len(), 16);
        for j in 0..4u8 {
            for i in 0..4u8 {
                assert!(lit.contains(&(i, j)));
            }
        }
    }

    #[test]
    fn test_bitmap_off_right_edge_clips() {
        let mut fb = test_framebuffer();
        let solid = [0xFFu8; 8];
        fb.draw_bitmap(124, 0, &solid, 8, 8, PixelColor::White);
        assert_eq!(lit_pixels(&fb).len(), 4 * 8);
    }

    #[test]
    fn test_bitmap_row_padding() {
        let mut fb = test_framebuffer();
        // 10 pixels wide: rows are 2 bytes, upper 6 bits of byte 1 unused.
        let data = [0xFF, 0xC0, 0xFF, 0xC0];
        fb.draw_bitmap(0, 0, &data, 10, 2, PixelColor::White);
        assert_eq!(lit_pixels(&fb).len(), 20);
    }
}
