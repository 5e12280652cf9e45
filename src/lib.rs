//! BMD31M090 OLED Display Driver
//!
//! A driver for the BMD31M090 0.96" 128x64 monochrome OLED module
//! (SSD1306-class controller) over I2C.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Host-resident framebuffer with explicit flush
//! - Native line, bitmap, text and number drawing
//! - Hardware scrolling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
//! use bmd31m090::{Builder, Dimensions, Display, Interface, PixelColor, DEFAULT_ADDRESS};
//!
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: SevenBitAddress,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let i2c = MockI2c;
//! let interface = Interface::new(i2c, DEFAULT_ADDRESS);
//! let dims = match Dimensions::new(128, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.initialize();
//!
//! display.draw_line(0, 0, 127, 63, PixelColor::White);
//! let _ = display.flush();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Pixel color types for the monochrome panel
pub mod color;
/// Controller command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Bitmap font table decoding
pub mod font;
/// Host-resident pixel buffer and drawing primitives
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Hardware scroll types
pub mod scroll;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::PixelColor;
pub use config::{Builder, Config, Dimensions, MAX_HEIGHT, MAX_WIDTH};
pub use display::Display;
pub use error::{BuilderError, Error, FontError};
pub use font::{Font, Glyph};
pub use framebuffer::{Framebuffer, BUFFER_CAPACITY};
pub use interface::{
    DisplayInterface, Interface, InterfaceError, ALTERNATE_ADDRESS, DEFAULT_ADDRESS,
    DEFAULT_BUS_FREQUENCY_HZ, DEFAULT_RETRY_LIMIT,
};
pub use scroll::{ScrollDirection, ScrollSpeed, ScrollState, VerticalScroll};
