//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_HEIGHT, MAX_WIDTH};

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (segment outputs)
    pub width: u8,
    /// Height in pixels (common outputs)
    pub height: u8,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// Height does not have to be a multiple of 8; a fractional final page
    /// is rounded up for buffer and transfer arithmetic.
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > MAX_WIDTH (128)
    /// - height == 0 or height > MAX_HEIGHT (64)
    pub fn new(width: u8, height: u8) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_WIDTH {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_HEIGHT {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8-pixel-tall pages, rounding a fractional final page up
    pub fn pages(&self) -> u8 {
        (self.height + 7) / 8
    }

    /// Required framebuffer size in bytes (`width * pages`)
    pub fn buffer_size(&self) -> usize {
        self.width as usize * self.pages() as usize
    }
}

/// Display configuration
///
/// Holds the operands of the fixed register script sent at initialization.
/// The defaults reproduce the module's reference sequence for the 128x64
/// panel; use `Builder` to override individual values.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Clock divide ratio / oscillator frequency byte
    pub clock_divide: u8,
    /// Vertical display offset
    pub display_offset: u8,
    /// Display start line (0..=63)
    pub start_line: u8,
    /// Charge pump setting byte
    pub charge_pump: u8,
    /// Memory addressing mode byte (0x00 = horizontal)
    pub addressing_mode: u8,
    /// COM pins hardware configuration byte
    pub com_pins: u8,
    /// Contrast value, also restored by `dim(false)`
    pub contrast: u8,
    /// VCOMH deselect level byte
    pub vcom_deselect: u8,
    /// Precharge period byte
    pub precharge: u8,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use bmd31m090::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(128, 64) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).contrast(0x7F).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Clock divide ratio / oscillator frequency byte
    clock_divide: u8,
    /// Vertical display offset
    display_offset: u8,
    /// Display start line
    start_line: u8,
    /// Charge pump setting byte
    charge_pump: u8,
    /// Memory addressing mode byte
    addressing_mode: u8,
    /// COM pins hardware configuration byte
    com_pins: u8,
    /// Contrast value
    contrast: u8,
    /// VCOMH deselect level byte
    vcom_deselect: u8,
    /// Precharge period byte
    precharge: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            // Datasheet-suggested ratio
            clock_divide: 0x80,
            display_offset: 0x00,
            start_line: 0x00,
            // Enable the internal charge pump
            charge_pump: 0x14,
            // Horizontal addressing, matching the raster order of flush()
            addressing_mode: 0x00,
            // 128x64 panel wiring
            com_pins: 0x12,
            contrast: crate::command::NORMAL_CONTRAST,
            vcom_deselect: 0x40,
            precharge: 0xF1,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the clock divide ratio / oscillator frequency byte
    pub fn clock_divide(mut self, value: u8) -> Self {
        self.clock_divide = value;
        self
    }

    /// Set the vertical display offset
    pub fn display_offset(mut self, value: u8) -> Self {
        self.display_offset = value;
        self
    }

    /// Set the display start line
    pub fn start_line(mut self, value: u8) -> Self {
        self.start_line = value;
        self
    }

    /// Set the charge pump byte (0x10 disables it for external VCC)
    pub fn charge_pump(mut self, value: u8) -> Self {
        self.charge_pump = value;
        self
    }

    /// Set the memory addressing mode byte
    pub fn addressing_mode(mut self, value: u8) -> Self {
        self.addressing_mode = value;
        self
    }

    /// Set the COM pins hardware configuration byte
    pub fn com_pins(mut self, value: u8) -> Self {
        self.com_pins = value;
        self
    }

    /// Set the contrast value
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set the VCOMH deselect level byte
    pub fn vcom_deselect(mut self, value: u8) -> Self {
        self.vcom_deselect = value;
        self
    }

    /// Set the precharge period byte
    pub fn precharge(mut self, value: u8) -> Self {
        self.precharge = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            clock_divide: self.clock_divide,
            display_offset: self.display_offset,
            start_line: self.start_line,
            charge_pump: self.charge_pump,
            addressing_mode: self.addressing_mode,
            com_pins: self.com_pins,
            contrast: self.contrast,
            vcom_deselect: self.vcom_deselect,
            precharge: self.precharge,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_valid() {
        let dims = Dimensions::new(128, 64).unwrap();
        assert_eq!(dims.pages(), 8);
        assert_eq!(dims.buffer_size(), 1024);
    }

    #[test]
    fn test_dimensions_fractional_page_rounds_up() {
        let dims = Dimensions::new(96, 20).unwrap();
        assert_eq!(dims.pages(), 3);
        assert_eq!(dims.buffer_size(), 96 * 3);
    }

    #[test]
    fn test_dimensions_rejects_zero() {
        assert!(Dimensions::new(0, 64).is_err());
        assert!(Dimensions::new(128, 0).is_err());
    }

    #[test]
    fn test_dimensions_rejects_oversize() {
        assert!(Dimensions::new(129, 64).is_err());
        assert!(Dimensions::new(128, 65).is_err());
    }

    #[test]
    fn test_builder_requires_dimensions() {
        assert!(matches!(
            Builder::new().build(),
            Err(BuilderError::MissingDimensions)
        ));
    }

    #[test]
    fn test_builder_defaults_match_reference_script() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 64).unwrap())
            .build()
            .unwrap();
        assert_eq!(config.clock_divide, 0x80);
        assert_eq!(config.charge_pump, 0x14);
        assert_eq!(config.addressing_mode, 0x00);
        assert_eq!(config.com_pins, 0x12);
        assert_eq!(config.contrast, 0xCF);
        assert_eq!(config.vcom_deselect, 0x40);
        assert_eq!(config.precharge, 0xF1);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 32).unwrap())
            .com_pins(0x02)
            .contrast(0x8F)
            .build()
            .unwrap();
        assert_eq!(config.dimensions.pages(), 4);
        assert_eq!(config.com_pins, 0x02);
        assert_eq!(config.contrast, 0x8F);
    }
}
