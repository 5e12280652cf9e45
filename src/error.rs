//! Error types for the driver
//!
//! This module defines error types for configuration building
//! ([`BuilderError`]), font table validation ([`FontError`]) and display
//! operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`FontError`] - Errors validating a font table
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus communication errors
//!
//! ## Example
//!
//! ```
//! use bmd31m090::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(200, 64); // Too wide
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum display width in pixels supported by the controller
///
/// The SSD1306-class controller drives up to 128 segment outputs.
pub const MAX_WIDTH: u8 = 128;

/// Maximum display height in pixels supported by the controller
///
/// The controller drives up to 64 common outputs (8 pages).
pub const MAX_HEIGHT: u8 = 64;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying bus error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Bus interface error
    ///
    /// Wraps the underlying error from the [`DisplayInterface`]
    /// implementation. With the default unbounded retry policy of
    /// [`Interface`](crate::interface::Interface) this variant is never
    /// produced; a bounded retry limit can surface it.
    Interface(I::Error),
    /// A text operation was invoked before a font was installed
    ///
    /// Call [`Display::set_font`](crate::Display::set_font) first.
    FontNotSet,
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::FontNotSet => write!(f, "No font selected"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels requested
        width: u8,
        /// Height in pixels requested
        height: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_WIDTH}x{MAX_HEIGHT})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

/// Errors that can occur when validating a font table
#[derive(Debug, PartialEq)]
pub enum FontError {
    /// The table does not hold the 2-byte header plus 96 printable glyphs
    TableTooShort {
        /// Required table length in bytes for the declared glyph size
        expected: usize,
        /// Provided table length in bytes
        provided: usize,
    },
    /// The header declares a zero glyph width or height
    ZeroGlyphSize,
}

impl core::fmt::Display for FontError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TableTooShort { expected, provided } => {
                write!(
                    f,
                    "Font table too short: expected {expected} bytes, provided {provided}"
                )
            }
            Self::ZeroGlyphSize => write!(f, "Font header declares a zero glyph size"),
        }
    }
}

impl core::error::Error for FontError {}
