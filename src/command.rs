//! SSD1306-class command definitions
//!
//! This module defines the command bytes used to control the BMD31M090's
//! display controller. Every bus transaction carries a one-byte control
//! prefix followed by one payload byte: [`CONTROL_COMMAND`] marks the
//! payload as a register/control instruction, [`CONTROL_DATA`] marks it as
//! raw framebuffer content.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bmd31m090::{command, DisplayInterface, Interface};
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
//! # use core::convert::Infallible;
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
//! # let mut interface = Interface::new(MockI2c, bmd31m090::DEFAULT_ADDRESS);
//! // Turn the panel on
//! let _ = interface.send_command(command::DISPLAY_ON);
//!
//! // Stream one framebuffer byte
//! let _ = interface.send_data(0xFF);
//! ```

// Control byte prefixes (Co = 0, D/C# selects command vs data)

/// Control prefix for a command transaction (0x00)
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control prefix for a data transaction (0x40)
pub const CONTROL_DATA: u8 = 0x40;

// Column/page addressing

/// Set lower column start address nibble (0x00 | `x & 0x0F`)
pub const SET_LOW_COLUMN: u8 = 0x00;

/// Set higher column start address nibble (0x10 | `x >> 4`)
pub const SET_HIGH_COLUMN: u8 = 0x10;

/// Set memory addressing mode (0x20)
///
/// Requires 1 operand: 0x00 = horizontal, 0x01 = vertical, 0x02 = page.
pub const SET_ADDRESSING_MODE: u8 = 0x20;

/// Set page start address for page addressing mode (0xB0 | page)
pub const SET_PAGE_START: u8 = 0xB0;

/// Set display start line (0x40 | line)
pub const SET_START_LINE: u8 = 0x40;

// Hardware configuration

/// Set contrast control (0x81)
///
/// Requires 1 operand: contrast 0x00..=0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Charge pump setting (0x8D)
///
/// Requires 1 operand: 0x14 = enable, 0x10 = disable (external VCC).
pub const SET_CHARGE_PUMP: u8 = 0x8D;

/// Segment remap, column 127 mapped to SEG0 (0xA1)
pub const SEGMENT_REMAP: u8 = 0xA1;

/// Resume display from RAM content (0xA4)
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;

/// Normal (non-inverted) display mode (0xA6)
pub const SET_NORMAL_DISPLAY: u8 = 0xA6;

/// Inverted display mode (0xA7)
pub const SET_INVERT_DISPLAY: u8 = 0xA7;

/// Set multiplex ratio (0xA8)
///
/// Requires 1 operand: `height - 1`.
pub const SET_MULTIPLEX: u8 = 0xA8;

/// Display off, sleep mode (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on, normal operation (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

/// COM output scan direction, remapped (0xC8)
pub const COM_SCAN_REMAP: u8 = 0xC8;

/// Set display offset (0xD3)
///
/// Requires 1 operand: vertical shift 0..=63.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set display clock divide ratio / oscillator frequency (0xD5)
///
/// Requires 1 operand; the datasheet-suggested value is 0x80.
pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;

/// Set precharge period (0xD9)
///
/// Requires 1 operand.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set COM pins hardware configuration (0xDA)
///
/// Requires 1 operand; 0x12 for the 128x64 panel wiring.
pub const SET_COM_PINS: u8 = 0xDA;

/// Set VCOMH deselect level (0xDB)
///
/// Requires 1 operand.
pub const SET_VCOM_DESELECT: u8 = 0xDB;

/// Default contrast value restored by [`dim(false)`](crate::Display::dim)
pub const NORMAL_CONTRAST: u8 = 0xCF;

// Hardware scrolling

/// Continuous right horizontal scroll setup (0x26)
pub const RIGHT_SCROLL: u8 = 0x26;

/// Continuous left horizontal scroll setup (0x27)
pub const LEFT_SCROLL: u8 = 0x27;

/// Vertical and right horizontal scroll setup (0x29)
pub const RIGHT_DIAGONAL_SCROLL: u8 = 0x29;

/// Vertical and left horizontal scroll setup (0x2A)
pub const LEFT_DIAGONAL_SCROLL: u8 = 0x2A;

/// Deactivate scroll (0x2E)
///
/// Must be issued before any new scroll setup; changing scroll parameters
/// while a scroll is active leaves the controller registers undefined.
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

/// Activate scroll (0x2F)
pub const ACTIVATE_SCROLL: u8 = 0x2F;

/// Set vertical scroll area (0xA3)
///
/// Requires 2 operands: rows in the top fixed area, rows in the scroll area.
pub const SET_SCROLL_AREA: u8 = 0xA3;
