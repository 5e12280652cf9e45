//! Graphics support via embedded-graphics
//!
//! This module implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait for
//! [`Framebuffer`], so the whole embedded-graphics primitive and text
//! ecosystem can render into the driver's buffer. Get the target through
//! [`Display::framebuffer_mut`](crate::Display::framebuffer_mut), draw, then
//! flush as usual.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//! };
//! use bmd31m090::PixelColor;
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{ErrorType, I2c, SevenBitAddress};
//! # use bmd31m090::{Builder, Dimensions, Display, Interface, DEFAULT_ADDRESS};
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: SevenBitAddress,
//! #         _operations: &mut [embedded_hal::i2c::Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let interface = Interface::new(MockI2c, DEFAULT_ADDRESS);
//! # let dims = match Dimensions::new(128, 64) {
//! #     Ok(dims) => dims,
//! #     Err(_) => return,
//! # };
//! # let config = match Builder::new().dimensions(dims).build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! # let mut display = Display::new(interface, config);
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(PixelColor::White))
//!     .draw(display.framebuffer_mut());
//!
//! if let Err(err) = display.flush() {
//!     let _ = err;
//! }
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::color::PixelColor;
use crate::framebuffer::Framebuffer;

impl DrawTarget for Framebuffer {
    type Color = PixelColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let sz = self.size();

        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }

            let x = x as u32;
            let y = y as u32;

            if x >= sz.width || y >= sz.height {
                continue;
            }

            self.set_pixel(x as u8, y as u8, color);
        }

        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(u32::from(dims.width), u32::from(dims.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PixelColor;
    use crate::config::Dimensions;
    use embedded_graphics::{
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
    };

    fn test_framebuffer() -> Framebuffer {
        Framebuffer::new(Dimensions::new(128, 64).unwrap())
    }

    #[test]
    fn test_size_reports_pixel_dimensions() {
        let fb = test_framebuffer();
        assert_eq!(fb.size(), Size::new(128, 64));
    }

    #[test]
    fn test_filled_rectangle_sets_pixels() {
        let mut fb = test_framebuffer();
        Rectangle::new(Point::new(2, 3), Size::new(4, 2))
            .into_styled(PrimitiveStyle::with_fill(PixelColor::White))
            .draw(&mut fb)
            .unwrap();

        for x in 2..6 {
            for y in 3..5 {
                assert_eq!(fb.pixel(x, y), Some(true), "({x}, {y})");
            }
        }
        assert_eq!(fb.pixel(1, 3), Some(false));
        assert_eq!(fb.pixel(6, 3), Some(false));
        assert_eq!(fb.pixel(2, 5), Some(false));
    }

    #[test]
    fn test_horizontal_line_matches_native_drawing() {
        let mut via_eg = test_framebuffer();
        Line::new(Point::new(5, 9), Point::new(40, 9))
            .into_styled(PrimitiveStyle::with_stroke(PixelColor::White, 1))
            .draw(&mut via_eg)
            .unwrap();

        let mut via_native = test_framebuffer();
        via_native.draw_line(5, 9, 40, 9, PixelColor::White);

        assert_eq!(via_eg.bytes(), via_native.bytes());
    }

    #[test]
    fn test_negative_and_out_of_bounds_pixels_dropped() {
        let mut fb = test_framebuffer();
        fb.draw_iter([
            Pixel(Point::new(-1, 0), PixelColor::White),
            Pixel(Point::new(0, -5), PixelColor::White),
            Pixel(Point::new(128, 0), PixelColor::White),
            Pixel(Point::new(0, 64), PixelColor::White),
            Pixel(Point::new(7, 7), PixelColor::White),
        ])
        .unwrap();

        assert_eq!(fb.pixel(7, 7), Some(true));
        let lit = fb.bytes().iter().map(|b| b.count_ones()).sum::<u32>();
        assert_eq!(lit, 1);
    }

    #[test]
    fn test_inverse_color_toggles_through_draw_target() {
        let mut fb = test_framebuffer();
        let pixel = [Pixel(Point::new(3, 3), PixelColor::Inverse)];
        fb.draw_iter(pixel).unwrap();
        assert_eq!(fb.pixel(3, 3), Some(true));
        fb.draw_iter(pixel).unwrap();
        assert_eq!(fb.pixel(3, 3), Some(false));
    }
}
