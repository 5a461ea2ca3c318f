//! SSD1306 OLED Text Driver
//!
//! A buffered driver for SSD1306 monochrome OLED modules (up to 128x64) on an
//! I2C bus, with built-in text rendering and framebuffer scrolling.
//!
//! ## Features
//!
//! - `no_std` compatible, no heap
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration
//! - Configurable display dimensions
//! - Text placement with bounds checking
//! - Framebuffer scrolling in any direction
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{I2c, Operation};
//! use ssd1306_text::{Builder, Dimensions, DisplayController, I2cInterface};
//!
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let i2c = MockI2c;
//! let dims = match Dimensions::new(128, 32) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let interface = I2cInterface::from_bus(i2c, &config.bus);
//! let mut display = DisplayController::new(interface, config);
//! let _ = display.init();
//!
//! display.clear();
//! let _ = display.draw_text("Hello FEKT!", 0, 0);
//! let _ = display.flush();
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Workshop demonstration sequence
pub mod demo;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// In-memory pixel buffer
pub mod framebuffer;
/// Graphics support via embedded-graphics
pub mod graphics;
/// Transport abstraction
pub mod interface;

pub use config::{
    Builder, BusConfig, Config, DEFAULT_ADDRESS, DemoTiming, Dimensions, MAX_COLUMNS, MAX_ROWS,
    Rotation,
};
pub use display::DisplayController;
pub use error::{BuilderError, Error};
pub use framebuffer::{Framebuffer, MAX_BUFFER_SIZE};
pub use graphics::{DEFAULT_FONT, text_size};
pub use interface::{I2cInterface, Transport};
