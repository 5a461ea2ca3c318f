//! In-memory pixel buffer
//!
//! The SSD1306 display RAM is organized in pages: each byte covers one column
//! and 8 rows, with the least significant bit on top. [`Framebuffer`] uses the
//! same layout so a flush is a single copy of the buffer to the controller in
//! horizontal addressing mode.
//!
//! ## Layout
//!
//! ```text
//!          x=0   x=1   ...  x=W-1
//! page 0  [b0 ] [b1 ] ... [bW-1 ]   rows 0..=7   (bit n = row n)
//! page 1  [bW ] [bW+1] ...          rows 8..=15
//! ```
//!
//! ## Example
//!
//! ```
//! use embedded_graphics_core::pixelcolor::BinaryColor;
//! use ssd1306_text::{Dimensions, Framebuffer};
//!
//! # let Ok(dims) = Dimensions::new(128, 32) else { return };
//! let mut fb = Framebuffer::new(dims);
//! fb.set_pixel(5, 10, BinaryColor::On);
//! assert_eq!(fb.pixel(5, 10), Some(BinaryColor::On));
//!
//! // Shift everything up one row
//! fb.scroll(0, -1);
//! assert_eq!(fb.pixel(5, 9), Some(BinaryColor::On));
//! assert_eq!(fb.pixel(5, 10), Some(BinaryColor::Off));
//! ```

use embedded_graphics_core::pixelcolor::BinaryColor;

use crate::config::Dimensions;
use crate::error::{MAX_COLUMNS, MAX_ROWS};

/// Size of the backing store, large enough for the biggest SSD1306 panel
pub const MAX_BUFFER_SIZE: usize = (MAX_COLUMNS as usize * MAX_ROWS as usize) / 8;

/// Fixed-size monochrome bitmap in SSD1306 page format
///
/// Only the first `dimensions.buffer_size()` bytes of the backing store are
/// used. The buffer is never resized.
#[derive(Clone)]
pub struct Framebuffer {
    /// Logical size
    dimensions: Dimensions,
    /// Page-packed pixels
    buffer: [u8; MAX_BUFFER_SIZE],
}

impl Framebuffer {
    /// Create a blank framebuffer
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            buffer: [0; MAX_BUFFER_SIZE],
        }
    }

    /// Framebuffer dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        u32::from(self.dimensions.width)
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        u32::from(self.dimensions.height)
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.fill(BinaryColor::Off);
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: BinaryColor) {
        let value = if color.is_on() { 0xFF } else { 0x00 };
        self.bytes_mut().fill(value);
    }

    /// Whether every pixel is off
    pub fn is_blank(&self) -> bool {
        self.as_bytes().iter().all(|byte| *byte == 0)
    }

    /// Set a single pixel
    ///
    /// Coordinates outside the framebuffer are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: BinaryColor) {
        let Some((index, bit)) = self.locate(x, y) else {
            return;
        };
        if color.is_on() {
            self.buffer[index] |= bit;
        } else {
            self.buffer[index] &= !bit;
        }
    }

    /// Read a single pixel, `None` outside the framebuffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<BinaryColor> {
        let (index, bit) = self.locate(x, y)?;
        Some(BinaryColor::from(self.buffer[index] & bit != 0))
    }

    /// Shift the whole image by (`dx`, `dy`) pixels
    ///
    /// Positive `dx` moves content right, positive `dy` moves it down.
    /// Pixels pushed past an edge are dropped and the exposed rows/columns
    /// are filled with off pixels.
    pub fn scroll(&mut self, dx: i32, dy: i32) {
        let width = i32::from(self.dimensions.width);
        let height = i32::from(self.dimensions.height);

        if dx.unsigned_abs() >= width.unsigned_abs() || dy.unsigned_abs() >= height.unsigned_abs()
        {
            self.clear();
            return;
        }
        if dx == 0 && dy == 0 {
            return;
        }

        // Walk the destination so every source pixel is read before it is
        // overwritten: away from the direction of travel.
        for row in 0..height {
            let y = if dy > 0 { height - 1 - row } else { row };
            for col in 0..width {
                let x = if dx > 0 { width - 1 - col } else { col };
                let (src_x, src_y) = (x - dx, y - dy);
                let color = if (0..width).contains(&src_x) && (0..height).contains(&src_y) {
                    self.pixel(src_x as u32, src_y as u32)
                        .unwrap_or(BinaryColor::Off)
                } else {
                    BinaryColor::Off
                };
                self.set_pixel(x as u32, y as u32, color);
            }
        }
    }

    /// Whether a `width` x `height` box at (`x`, `y`) lies fully inside
    pub fn contains_box(&self, x: i32, y: i32, width: u32, height: u32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let right = (x as u32).saturating_add(width);
        let bottom = (y as u32).saturating_add(height);
        right <= self.width() && bottom <= self.height()
    }

    /// Raw page-packed bytes, exactly `dimensions.buffer_size()` long
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.dimensions.buffer_size()]
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        let size = self.dimensions.buffer_size();
        &mut self.buffer[..size]
    }

    /// Byte index and bit mask of a pixel
    fn locate(&self, x: u32, y: u32) -> Option<(usize, u8)> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let index = (x + (y / 8) * self.width()) as usize;
        let bit = 0x01 << (y % 8);
        Some((index, bit))
    }
}

impl core::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Framebuffer")
            .field("dimensions", &self.dimensions)
            .field("bytes", &self.as_bytes().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_framebuffer() -> Framebuffer {
        Framebuffer::new(Dimensions::new(128, 32).unwrap())
    }

    fn lit_pixels(fb: &Framebuffer) -> usize {
        let mut count = 0;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.pixel(x, y) == Some(BinaryColor::On) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_page_layout() {
        let mut fb = test_framebuffer();
        fb.set_pixel(0, 0, BinaryColor::On);
        fb.set_pixel(3, 9, BinaryColor::On);
        let bytes = fb.as_bytes();
        assert_eq!(bytes.len(), 512);
        assert_eq!(bytes[0], 0x01);
        // page 1, column 3, bit 1
        assert_eq!(bytes[128 + 3], 0x02);
    }

    #[test]
    fn test_set_pixel_off_clears_bit() {
        let mut fb = test_framebuffer();
        fb.fill(BinaryColor::On);
        fb.set_pixel(7, 7, BinaryColor::Off);
        assert_eq!(fb.as_bytes()[7], 0x7F);
    }

    #[test]
    fn test_out_of_range_pixels_ignored() {
        let mut fb = test_framebuffer();
        fb.set_pixel(128, 0, BinaryColor::On);
        fb.set_pixel(0, 32, BinaryColor::On);
        assert!(fb.is_blank());
        assert_eq!(fb.pixel(128, 0), None);
    }

    #[test]
    fn test_clear_after_fill() {
        let mut fb = test_framebuffer();
        fb.fill(BinaryColor::On);
        assert_eq!(lit_pixels(&fb), 128 * 32);
        fb.clear();
        assert!(fb.is_blank());
        assert_eq!(lit_pixels(&fb), 0);
    }

    #[test]
    fn test_scroll_up_one_row() {
        let mut fb = test_framebuffer();
        fb.set_pixel(5, 10, BinaryColor::On);
        fb.scroll(0, -1);
        assert_eq!(fb.pixel(5, 9), Some(BinaryColor::On));
        assert_eq!(lit_pixels(&fb), 1);
    }

    #[test]
    fn test_scroll_up_blanks_bottom_row() {
        let mut fb = test_framebuffer();
        fb.fill(BinaryColor::On);
        fb.scroll(0, -1);
        for x in 0..128 {
            assert_eq!(fb.pixel(x, 31), Some(BinaryColor::Off));
            assert_eq!(fb.pixel(x, 30), Some(BinaryColor::On));
        }
    }

    #[test]
    fn test_scroll_up_height_times_blanks_buffer() {
        let mut fb = test_framebuffer();
        fb.fill(BinaryColor::On);
        for _ in 0..fb.height() {
            assert!(!fb.is_blank());
            fb.scroll(0, -1);
        }
        assert!(fb.is_blank());
    }

    #[test]
    fn test_scroll_crosses_page_boundary() {
        let mut fb = test_framebuffer();
        fb.set_pixel(40, 8, BinaryColor::On);
        fb.scroll(0, -1);
        assert_eq!(fb.pixel(40, 7), Some(BinaryColor::On));
        fb.scroll(0, 2);
        assert_eq!(fb.pixel(40, 9), Some(BinaryColor::On));
        assert_eq!(lit_pixels(&fb), 1);
    }

    #[test]
    fn test_scroll_horizontal() {
        let mut fb = test_framebuffer();
        fb.set_pixel(0, 0, BinaryColor::On);
        fb.set_pixel(127, 1, BinaryColor::On);
        fb.scroll(3, 0);
        assert_eq!(fb.pixel(3, 0), Some(BinaryColor::On));
        // pushed off the right edge
        assert_eq!(lit_pixels(&fb), 1);

        fb.scroll(-3, 0);
        assert_eq!(fb.pixel(0, 0), Some(BinaryColor::On));
        assert_eq!(lit_pixels(&fb), 1);
    }

    #[test]
    fn test_scroll_diagonal() {
        let mut fb = test_framebuffer();
        fb.set_pixel(10, 10, BinaryColor::On);
        fb.scroll(2, -3);
        assert_eq!(fb.pixel(12, 7), Some(BinaryColor::On));
        assert_eq!(lit_pixels(&fb), 1);
    }

    #[test]
    fn test_scroll_past_edge_clears() {
        let mut fb = test_framebuffer();
        fb.fill(BinaryColor::On);
        fb.scroll(0, 32);
        assert!(fb.is_blank());

        fb.fill(BinaryColor::On);
        fb.scroll(-128, 0);
        assert!(fb.is_blank());
    }

    #[test]
    fn test_scroll_zero_is_noop() {
        let mut fb = test_framebuffer();
        fb.set_pixel(1, 2, BinaryColor::On);
        let before = fb.clone();
        fb.scroll(0, 0);
        assert_eq!(fb.as_bytes(), before.as_bytes());
    }

    #[test]
    fn test_contains_box() {
        let fb = test_framebuffer();
        assert!(fb.contains_box(0, 0, 128, 32));
        assert!(fb.contains_box(0, 16, 30, 10));
        assert!(!fb.contains_box(0, 23, 30, 10));
        assert!(!fb.contains_box(100, 0, 30, 10));
        assert!(!fb.contains_box(-1, 0, 6, 10));
        assert!(!fb.contains_box(0, -1, 6, 10));
    }
}
