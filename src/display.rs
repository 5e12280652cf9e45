//! Core display operations

use crate::color::PixelColor;
use crate::command::{
    ACTIVATE_SCROLL, COM_SCAN_REMAP, DEACTIVATE_SCROLL, DISPLAY_ALL_ON_RESUME, DISPLAY_OFF,
    DISPLAY_ON, LEFT_DIAGONAL_SCROLL, LEFT_SCROLL, RIGHT_DIAGONAL_SCROLL, RIGHT_SCROLL,
    SEGMENT_REMAP, SET_ADDRESSING_MODE, SET_CHARGE_PUMP, SET_COM_PINS, SET_CONTRAST,
    SET_DISPLAY_CLOCK_DIV, SET_DISPLAY_OFFSET, SET_HIGH_COLUMN, SET_INVERT_DISPLAY, SET_LOW_COLUMN,
    SET_MULTIPLEX, SET_NORMAL_DISPLAY, SET_PAGE_START, SET_PRECHARGE, SET_SCROLL_AREA,
    SET_START_LINE, SET_VCOM_DESELECT,
};
use crate::config::Config;
use crate::error::Error;
use crate::font::Font;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;
use crate::scroll::{ScrollDirection, ScrollSpeed, ScrollState, VerticalScroll};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Driver for one BMD31M090 module
///
/// Owns the framebuffer, the bus interface, the active font and the scroll
/// state. Drawing operations mutate host memory only; [`flush`](Self::flush)
/// pushes the whole buffer to the panel. Text operations are the exception:
/// they stream font bytes straight into controller RAM and bypass the
/// framebuffer entirely.
///
/// The controller keeps an implicit (page, column) addressing cursor that
/// cannot be read back, so every RAM write here re-establishes the cursor
/// immediately before its data bytes.
pub struct Display<'a, I>
where
    I: DisplayInterface,
{
    /// Bus interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Host-resident pixel buffer
    framebuffer: Framebuffer,
    /// Active font for text operations
    font: Option<Font<'a>>,
    /// Tracked controller scroll state
    scroll_state: ScrollState,
}

impl<'a, I> Display<'a, I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// The framebuffer is allocated and zeroed here; nothing is sent on the
    /// bus until [`initialize`](Self::initialize).
    pub fn new(interface: I, config: Config) -> Self {
        let framebuffer = Framebuffer::new(config.dimensions);
        Self {
            interface,
            config,
            framebuffer,
            font: None,
            scroll_state: ScrollState::Stopped,
        }
    }

    /// Send the initialization script and bring the panel up
    ///
    /// Writes the fixed register-configuration sequence (operands from
    /// [`Config`]), turns the display on, then clears and flushes the
    /// framebuffer so the panel starts blank.
    pub fn initialize(&mut self) -> DisplayResult<I> {
        let dims = self.config.dimensions;

        self.send_command(DISPLAY_OFF)?;

        self.send_command(SET_DISPLAY_CLOCK_DIV)?;
        self.send_command(self.config.clock_divide)?;

        self.send_command(SET_MULTIPLEX)?;
        self.send_command(dims.height - 1)?;

        self.send_command(SET_DISPLAY_OFFSET)?;
        self.send_command(self.config.display_offset)?;
        self.send_command(SET_START_LINE | self.config.start_line)?;
        self.send_command(SET_CHARGE_PUMP)?;
        self.send_command(self.config.charge_pump)?;

        self.send_command(SET_ADDRESSING_MODE)?;
        self.send_command(self.config.addressing_mode)?;
        self.send_command(SEGMENT_REMAP)?;
        self.send_command(COM_SCAN_REMAP)?;

        self.send_command(SET_COM_PINS)?;
        self.send_command(self.config.com_pins)?;
        self.send_command(SET_CONTRAST)?;
        self.send_command(self.config.contrast)?;

        self.send_command(SET_VCOM_DESELECT)?;
        self.send_command(self.config.vcom_deselect)?;

        self.send_command(SET_PRECHARGE)?;
        self.send_command(self.config.precharge)?;
        self.send_command(DISPLAY_ALL_ON_RESUME)?;
        self.send_command(SET_NORMAL_DISPLAY)?;
        self.send_command(DEACTIVATE_SCROLL)?;
        self.scroll_state = ScrollState::Stopped;

        self.send_command(DISPLAY_ON)?;

        self.framebuffer.clear();
        self.flush()?;

        log::debug!(
            "display initialized: {}x{}, {} pages",
            dims.width,
            dims.height,
            dims.pages()
        );
        Ok(())
    }

    /// Push the framebuffer to the panel
    ///
    /// Resets the addressing cursor to page 0, column 0, then streams every
    /// active buffer byte as an individual data transaction. With the
    /// horizontal addressing mode set at init, buffer order is raster
    /// order. The framebuffer is left untouched.
    pub fn flush(&mut self) -> DisplayResult<I> {
        self.set_cursor(0, 0)?;
        let count = self.framebuffer.dimensions().buffer_size();
        for i in 0..count {
            self.send_data(self.framebuffer.bytes()[i])?;
        }
        Ok(())
    }

    /// Set every framebuffer pixel to off (host memory only)
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Set, clear, or invert a single framebuffer pixel
    pub fn set_pixel(&mut self, x: u8, y: u8, color: PixelColor) {
        self.framebuffer.set_pixel(x, y, color);
    }

    /// Draw a line into the framebuffer
    pub fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, color: PixelColor) {
        self.framebuffer.draw_line(x0, y0, x1, y1, color);
    }

    /// Draw a horizontal line into the framebuffer
    pub fn draw_hline(&mut self, x: u8, y: u8, width: u8, color: PixelColor) {
        self.framebuffer.draw_hline(x, y, width, color);
    }

    /// Draw a vertical line into the framebuffer
    pub fn draw_vline(&mut self, x: u8, y: u8, height: u8, color: PixelColor) {
        self.framebuffer.draw_vline(x, y, height, color);
    }

    /// Blit a packed 1-bit bitmap into the framebuffer
    pub fn draw_bitmap(
        &mut self,
        x: i16,
        y: i16,
        data: &[u8],
        width: u8,
        height: u8,
        color: PixelColor,
    ) {
        self.framebuffer.draw_bitmap(x, y, data, width, height, color);
    }

    /// Install the font used by text operations
    pub fn set_font(&mut self, font: Font<'a>) {
        self.font = Some(font);
    }

    /// The currently installed font, if any
    pub fn font(&self) -> Option<Font<'a>> {
        self.font
    }

    /// Draw one character directly into controller RAM
    ///
    /// `row` addresses 8-pixel pages, not pixel rows. A glyph starting past
    /// the right edge wraps to column 0 on the next glyph row. Codes
    /// outside printable ASCII render as a space.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FontNotSet`] if no font is installed.
    pub fn draw_char(&mut self, x: u8, row: u8, code: u8) -> DisplayResult<I> {
        let font = self.font.ok_or(Error::FontNotSet)?;
        let width = self.config.dimensions.width;

        let (x, row) = if x > width - 1 {
            (0, row + font.pages_per_glyph())
        } else {
            (x, row)
        };

        let glyph = font.glyph(code);
        for page in 0..font.pages_per_glyph() {
            self.set_cursor(x, row + page)?;
            for i in 0..glyph.page_row(page).len() {
                self.send_data(glyph.page_row(page)[i])?;
            }
        }
        Ok(())
    }

    /// Draw a string directly into controller RAM
    ///
    /// Advances by the glyph width per character and wraps to column 0 on
    /// the next glyph row when the next glyph would not fit the configured
    /// display width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FontNotSet`] if no font is installed.
    pub fn draw_string(&mut self, x: u8, row: u8, text: &str) -> DisplayResult<I> {
        let font = self.font.ok_or(Error::FontNotSet)?;
        let glyph_width = font.glyph_width();
        let pages = font.pages_per_glyph();
        let wrap_at = self.config.dimensions.width.saturating_sub(glyph_width);

        let mut x = x;
        let mut row = row;
        for code in text.bytes() {
            self.draw_char(x, row, code)?;
            x = x.saturating_add(glyph_width);
            if x > wrap_at {
                x = 0;
                row += pages;
            }
        }
        Ok(())
    }

    /// Draw a fixed-width decimal number directly into controller RAM
    ///
    /// Renders `digits` glyph positions left to right. Leading zero digits
    /// are blanked with spaces until the first nonzero digit; the final
    /// digit is always drawn, so a zero value shows a single '0'.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FontNotSet`] if no font is installed.
    pub fn draw_number(&mut self, x: u8, row: u8, value: u32, digits: u8) -> DisplayResult<I> {
        let font = self.font.ok_or(Error::FontNotSet)?;
        let glyph_width = font.glyph_width();

        let mut significant = false;
        for t in 0..digits {
            let cx = x.saturating_add(glyph_width.saturating_mul(t));
            let digit = 10u32
                .checked_pow(u32::from(digits - t - 1))
                .map_or(0, |p| (value / p) % 10);

            if !significant && t < digits - 1 {
                if digit == 0 {
                    self.draw_char(cx, row, b' ')?;
                    continue;
                }
                significant = true;
            }
            self.draw_char(cx, row, b'0' + digit as u8)?;
        }
        Ok(())
    }

    /// Start a continuous right-handed scroll
    ///
    /// `start_page`/`end_page` bound the scrolled pages. Any active scroll
    /// is deactivated first; the hardware requires this before
    /// reprogramming. With a vertical component, the vertical scroll area
    /// is set to the full display height before the combined command.
    pub fn start_scroll_right(
        &mut self,
        start_page: u8,
        end_page: u8,
        speed: ScrollSpeed,
        vertical: VerticalScroll,
    ) -> DisplayResult<I> {
        self.start_scroll(ScrollDirection::Right, start_page, end_page, speed, vertical)
    }

    /// Start a continuous left-handed scroll
    ///
    /// See [`start_scroll_right`](Self::start_scroll_right).
    pub fn start_scroll_left(
        &mut self,
        start_page: u8,
        end_page: u8,
        speed: ScrollSpeed,
        vertical: VerticalScroll,
    ) -> DisplayResult<I> {
        self.start_scroll(ScrollDirection::Left, start_page, end_page, speed, vertical)
    }

    fn start_scroll(
        &mut self,
        direction: ScrollDirection,
        start_page: u8,
        end_page: u8,
        speed: ScrollSpeed,
        vertical: VerticalScroll,
    ) -> DisplayResult<I> {
        self.send_command(DEACTIVATE_SCROLL)?;
        self.scroll_state = ScrollState::Stopped;

        match vertical {
            VerticalScroll::None => {
                let setup = match direction {
                    ScrollDirection::Right => RIGHT_SCROLL,
                    ScrollDirection::Left => LEFT_SCROLL,
                };
                self.send_command(setup)?;
                self.send_command(0x00)?; // A: dummy
                self.send_command(start_page)?;
                self.send_command(speed as u8)?;
                self.send_command(end_page)?;
                self.send_command(0x00)?; // E: dummy
                self.send_command(0xFF)?; // F: dummy
                self.send_command(ACTIVATE_SCROLL)?;
            }
            VerticalScroll::Top | VerticalScroll::Bottom => {
                // Fixed rows = 0, scroll rows = full height.
                self.send_command(SET_SCROLL_AREA)?;
                self.send_command(0x00)?;
                self.send_command(self.config.dimensions.height)?;

                let setup = match direction {
                    ScrollDirection::Right => RIGHT_DIAGONAL_SCROLL,
                    ScrollDirection::Left => LEFT_DIAGONAL_SCROLL,
                };
                self.send_command(setup)?;
                self.send_command(0x00)?; // A: dummy
                self.send_command(start_page)?;
                self.send_command(speed as u8)?;
                self.send_command(end_page)?;
                self.send_command(vertical.offset())?;
                self.send_command(ACTIVATE_SCROLL)?;
            }
        }

        self.scroll_state = ScrollState::Scrolling {
            direction,
            vertical,
        };
        Ok(())
    }

    /// Stop any active scroll
    pub fn stop_scroll(&mut self) -> DisplayResult<I> {
        self.send_command(DEACTIVATE_SCROLL)?;
        self.scroll_state = ScrollState::Stopped;
        Ok(())
    }

    /// The scroll state as last programmed by this driver
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll_state
    }

    /// Set the contrast register
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        self.send_command(SET_CONTRAST)?;
        self.send_command(contrast)
    }

    /// Dim the panel, or restore the configured contrast
    ///
    /// The usable contrast range is narrow; this switches between minimum
    /// brightness and the configured normal value.
    pub fn dim(&mut self, dim: bool) -> DisplayResult<I> {
        self.set_contrast(if dim { 0x00 } else { self.config.contrast })
    }

    /// Invert the panel (black-on-white), or restore normal polarity
    ///
    /// Controller-side effect only; the framebuffer is unchanged.
    pub fn invert(&mut self, invert: bool) -> DisplayResult<I> {
        self.send_command(if invert {
            SET_INVERT_DISPLAY
        } else {
            SET_NORMAL_DISPLAY
        })
    }

    /// Establish the controller addressing cursor at (column, page)
    ///
    /// Three commands: page start address, then the column address high and
    /// low nibbles. Required before every RAM write; the cursor cannot be
    /// queried back.
    fn set_cursor(&mut self, x: u8, row: u8) -> DisplayResult<I> {
        self.send_command(SET_PAGE_START + row)?;
        self.send_command(((x & 0xF0) >> 4) | SET_HIGH_COLUMN)?;
        self.send_command((x & 0x0F) | SET_LOW_COLUMN)
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send a data byte to the display controller
    fn send_data(&mut self, data: u8) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> crate::config::Dimensions {
        self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the framebuffer
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Access the framebuffer mutably
    ///
    /// Useful for drawing through the `embedded-graphics` `DrawTarget`
    /// impl (feature `graphics`).
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }
}
