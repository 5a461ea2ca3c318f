//! Core display operations

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    text::{Baseline, renderer::TextRenderer},
};
use embedded_graphics_core::{geometry::Point, pixelcolor::BinaryColor};

use crate::command::{
    CHARGE_PUMP_DISABLE, CHARGE_PUMP_ENABLE, COM_SCAN_DECREMENT, COM_SCAN_INCREMENT,
    DISPLAY_ALL_ON_RESUME, DISPLAY_OFF, DISPLAY_ON, INVERT_DISPLAY, MEMORY_MODE_HORIZONTAL,
    NORMAL_DISPLAY, SET_CHARGE_PUMP, SET_CLOCK_DIVIDE, SET_COLUMN_ADDRESS, SET_COM_PINS,
    SET_CONTRAST, SET_DISPLAY_OFFSET, SET_MEMORY_MODE, SET_MULTIPLEX_RATIO, SET_PAGE_ADDRESS,
    SET_PRECHARGE, SET_SEGMENT_REMAP, SET_START_LINE, SET_VCOM_DESELECT,
};
use crate::config::{Config, Dimensions, Rotation};
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::graphics::{DEFAULT_FONT, text_size};
use crate::interface::Transport;

type DisplayResult<T> = core::result::Result<(), Error<T>>;

/// Glyph drawn in place of control characters
const REPLACEMENT_CHAR: char = '?';

/// Buffered driver for an SSD1306 display
///
/// Drawing, clearing and scrolling only touch the local [`Framebuffer`];
/// nothing reaches the panel until [`flush`](Self::flush) is called.
///
/// ## Lifecycle
///
/// 1. [`DisplayController::new()`] - no bus traffic
/// 2. [`DisplayController::init()`] - power-up command sequence
/// 3. [`clear`](Self::clear) / [`draw_text`](Self::draw_text) /
///    [`scroll`](Self::scroll) - framebuffer only
/// 4. [`flush`](Self::flush) - copy the framebuffer to the panel
pub struct DisplayController<T>
where
    T: Transport,
{
    /// Bus connection to the controller
    transport: T,
    /// Display configuration
    config: Config,
    /// Local copy of the display RAM
    framebuffer: Framebuffer,
    /// Whether the panel is switched on
    is_display_on: bool,
}

impl<T> DisplayController<T>
where
    T: Transport,
{
    /// Create a new DisplayController instance
    pub fn new(transport: T, config: Config) -> Self {
        let framebuffer = Framebuffer::new(config.dimensions);
        Self {
            transport,
            config,
            framebuffer,
            is_display_on: false,
        }
    }

    /// Send the power-up sequence and switch the panel on
    ///
    /// The framebuffer is left as is; call [`flush`](Self::flush) to put
    /// something on screen.
    pub fn init(&mut self) -> DisplayResult<T> {
        let height = self.config.dimensions.height;
        let (precharge, charge_pump) = if self.config.external_vcc {
            (0x22, CHARGE_PUMP_DISABLE)
        } else {
            (0xF1, CHARGE_PUMP_ENABLE)
        };

        self.send_commands(&[DISPLAY_OFF])?;
        self.send_commands(&[SET_MEMORY_MODE, MEMORY_MODE_HORIZONTAL])?;
        self.send_commands(&[SET_START_LINE])?;
        self.apply_rotation(self.config.rotation)?;
        self.send_commands(&[SET_MULTIPLEX_RATIO, (height - 1) as u8])?;
        self.send_commands(&[SET_DISPLAY_OFFSET, 0x00])?;
        self.send_commands(&[SET_COM_PINS, self.config.com_pins])?;

        // Timing and driving scheme
        self.send_commands(&[SET_CLOCK_DIVIDE, 0x80])?;
        self.send_commands(&[SET_PRECHARGE, precharge])?;
        self.send_commands(&[SET_VCOM_DESELECT, 0x30])?;

        self.send_commands(&[SET_CONTRAST, self.config.contrast])?;
        self.send_commands(&[DISPLAY_ALL_ON_RESUME])?;
        self.send_commands(&[NORMAL_DISPLAY])?;
        self.send_commands(&[SET_CHARGE_PUMP, charge_pump])?;

        self.power_on()?;
        log::info!(
            "SSD1306 {}x{} initialized",
            self.config.dimensions.width,
            self.config.dimensions.height
        );
        Ok(())
    }

    /// Turn every framebuffer pixel off
    ///
    /// The panel keeps showing the previous frame until the next flush.
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Render `text` with the built-in font, top-left corner at (`x`, `y`)
    ///
    /// Glyph pixels are OR-ed into the framebuffer; the background of each
    /// character cell is left untouched. Text is always a single line: every
    /// `char` takes one cell, control characters (including `\n`) render as
    /// `?` and characters missing from the font use its replacement glyph.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if the text box does not fit entirely
    /// inside the framebuffer. Nothing is drawn in that case.
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32) -> DisplayResult<T> {
        self.draw_text_with_font(text, x, y, &DEFAULT_FONT)
    }

    /// Render `text` with a caller-supplied mono font
    ///
    /// Same placement and bounds rules as [`draw_text`](Self::draw_text).
    pub fn draw_text_with_font(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font: &MonoFont<'_>,
    ) -> DisplayResult<T> {
        let size = text_size(text, font);
        if size.width == 0 {
            return Ok(());
        }
        if !self.framebuffer.contains_box(x, y, size.width, size.height) {
            log::warn!(
                "text {:?} ({}x{}) at ({}, {}) does not fit",
                text,
                size.width,
                size.height,
                x,
                y
            );
            return Err(Error::OutOfBounds {
                x,
                y,
                width: size.width,
                height: size.height,
            });
        }

        // One cell per char on a single line; control characters are drawn
        // as the replacement glyph so the measured box always holds.
        let style = MonoTextStyle::new(font, BinaryColor::On);
        let advance = (font.character_size.width + font.character_spacing) as i32;
        let mut glyph = [0u8; 4];
        for (index, c) in text.chars().enumerate() {
            let c = if c.is_control() { REPLACEMENT_CHAR } else { c };
            let origin = Point::new(x + index as i32 * advance, y);
            let Ok(_) = style.draw_string(
                c.encode_utf8(&mut glyph),
                origin,
                Baseline::Top,
                &mut self.framebuffer,
            );
        }
        Ok(())
    }

    /// Shift the framebuffer content by (`dx`, `dy`) pixels
    ///
    /// `scroll(0, -1)` moves everything up one row and blanks the bottom row.
    pub fn scroll(&mut self, dx: i32, dy: i32) {
        self.framebuffer.scroll(dx, dy);
    }

    /// Copy the whole framebuffer to the display
    ///
    /// Sets the column and page window to the full panel, then writes the
    /// buffer in one transfer. Blocks until the transport returns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if any bus write fails. No retry is made.
    pub fn flush(&mut self) -> DisplayResult<T> {
        let Dimensions { width, .. } = self.config.dimensions;
        let first_column = self.config.column_offset;
        let last_column = first_column.saturating_add((width - 1) as u8);
        let last_page = (self.config.dimensions.pages() - 1) as u8;

        self.send_commands(&[SET_COLUMN_ADDRESS, first_column, last_column])?;
        self.send_commands(&[SET_PAGE_ADDRESS, 0, last_page])?;

        let frame = self.framebuffer.as_bytes();
        log::debug!("flush {} bytes", frame.len());
        self.transport
            .write_frame(frame)
            .map_err(Error::Transport)
    }

    /// Switch the panel off (display RAM is kept)
    pub fn power_off(&mut self) -> DisplayResult<T> {
        self.send_commands(&[DISPLAY_OFF])?;
        self.is_display_on = false;
        log::info!("display off");
        Ok(())
    }

    /// Switch the panel on
    pub fn power_on(&mut self) -> DisplayResult<T> {
        self.send_commands(&[DISPLAY_ON])?;
        self.is_display_on = true;
        Ok(())
    }

    /// Set contrast (0x00 dimmest, 0xFF brightest)
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<T> {
        self.send_commands(&[SET_CONTRAST, contrast])?;
        self.config.contrast = contrast;
        Ok(())
    }

    /// Invert the panel output without touching the framebuffer
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<T> {
        let command = if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        };
        self.send_commands(&[command])
    }

    /// Change the display rotation
    ///
    /// Takes effect on the next refresh of the panel; the framebuffer does not
    /// need to be redrawn.
    pub fn set_rotation(&mut self, rotation: Rotation) -> DisplayResult<T> {
        self.apply_rotation(rotation)?;
        self.config.rotation = rotation;
        Ok(())
    }

    fn apply_rotation(&mut self, rotation: Rotation) -> DisplayResult<T> {
        let (remap, scan) = match rotation {
            Rotation::Rotate0 => (SET_SEGMENT_REMAP | 0x01, COM_SCAN_DECREMENT),
            Rotation::Rotate180 => (SET_SEGMENT_REMAP, COM_SCAN_INCREMENT),
        };
        self.send_commands(&[remap])?;
        self.send_commands(&[scan])
    }

    /// Send commands to the display controller
    fn send_commands(&mut self, commands: &[u8]) -> DisplayResult<T> {
        self.transport
            .write_commands(commands)
            .map_err(Error::Transport)
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the panel is switched on
    pub fn is_display_on(&self) -> bool {
        self.is_display_on
    }

    /// Access the framebuffer
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Access the framebuffer mutably
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    /// Give back the transport
    pub fn release(self) -> T {
        self.transport
    }
}
