//! Graphics support via embedded-graphics
//!
//! This module implements the [`DrawTarget`] trait from the embedded-graphics
//! ecosystem for [`Framebuffer`] and [`DisplayController`], and provides the
//! built-in font used for text.
//!
//! ## Features
//!
//! - Any embedded-graphics drawable can render into the framebuffer
//! - Drawing is clipped at the framebuffer edge
//! - Text measurement for the built-in mono font
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//! };
//! use ssd1306_text::{Builder, Dimensions, DisplayController, Transport};
//! # use core::convert::Infallible;
//! # struct MockTransport;
//! # impl Transport for MockTransport {
//! #     type Error = Infallible;
//! #     fn write_commands(&mut self, _commands: &[u8]) -> Result<(), Infallible> { Ok(()) }
//! #     fn write_frame(&mut self, _data: &[u8]) -> Result<(), Infallible> { Ok(()) }
//! # }
//! # let dims = match Dimensions::new(128, 32) {
//! #     Ok(dims) => dims,
//! #     Err(_) => return,
//! # };
//! # let config = match Builder::new().dimensions(dims).build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! let mut display = DisplayController::new(MockTransport, config);
//!
//! // Draw a frame around the screen
//! let _ = Rectangle::new(Point::zero(), Size::new(128, 32))
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut display);
//!
//! // Update physical display
//! let _ = display.flush();
//! ```

use core::convert::Infallible;
use embedded_graphics::mono_font::{MonoFont, ascii::FONT_6X10};
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::display::DisplayController;
use crate::framebuffer::Framebuffer;
use crate::interface::Transport;

/// Font used by [`DisplayController::draw_text`]
///
/// 6x10 pixel cells, ASCII only. Characters without a glyph render as `?`.
pub const DEFAULT_FONT: MonoFont<'static> = FONT_6X10;

/// Size of the box `text` occupies when rendered with `font`
///
/// An empty string has zero size.
pub fn text_size(text: &str, font: &MonoFont<'_>) -> Size {
    let count = text.chars().count() as u32;
    if count == 0 {
        return Size::zero();
    }
    let width = count
        .saturating_mul(font.character_size.width)
        .saturating_add((count - 1).saturating_mul(font.character_spacing));
    Size::new(width, font.character_size.height)
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            self.set_pixel(x as u32, y as u32, color);
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

impl<T> DrawTarget for DisplayController<T>
where
    T: Transport,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.framebuffer_mut().draw_iter(pixels)
    }
}

impl<T> OriginDimensions for DisplayController<T>
where
    T: Transport,
{
    fn size(&self) -> Size {
        self.framebuffer().size()
    }
}
