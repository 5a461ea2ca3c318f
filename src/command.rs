//! SSD1306 command definitions
//!
//! This module defines the command bytes used to control the SSD1306 OLED
//! controller. Over I2C every transfer starts with a control byte that tells
//! the controller whether the rest of the transfer is commands or display RAM
//! data.
//!
//! ## Transfer Structure
//!
//! 1. START + 7-bit address (write)
//! 2. Control byte: [`CONTROL_COMMAND`] or [`CONTROL_DATA`]
//! 3. Command bytes (with their arguments) or pixel data
//! 4. STOP
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_text::{command, I2cInterface, Transport};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{I2c, Operation};
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
//! let mut interface = I2cInterface::new(MockI2c, 0x3C);
//!
//! // Set contrast to half brightness
//! let _ = interface.write_commands(&[command::SET_CONTRAST, 0x7F]);
//!
//! // Turn the panel on
//! let _ = interface.write_commands(&[command::DISPLAY_ON]);
//! ```

// I2C control bytes

/// Control byte announcing a command stream (Co = 0, D/C# = 0)
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte announcing a display RAM data stream (Co = 0, D/C# = 1)
pub const CONTROL_DATA: u8 = 0x40;

// Fundamental commands

/// Set contrast control command (0x81)
///
/// Requires 1 byte: contrast 0x00..=0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Resume to RAM content display (0xA4)
///
/// Output follows display RAM. The alternative (0xA5) lights every pixel.
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;

/// Normal display (0xA6)
///
/// RAM bit 1 = pixel on.
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverse display (0xA7)
///
/// RAM bit 0 = pixel on.
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Display off, sleep mode (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on, normal mode (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Addressing commands

/// Set memory addressing mode command (0x20)
///
/// Requires 1 byte: 0x00 = horizontal, 0x01 = vertical, 0x02 = page.
pub const SET_MEMORY_MODE: u8 = 0x20;

/// Horizontal addressing mode argument for [`SET_MEMORY_MODE`]
///
/// The column pointer wraps to the next page at the end of the column
/// window, so a whole frame can be streamed in one transfer.
pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;

/// Set column address window command (0x21)
///
/// Requires 2 bytes: [start column, end column]
pub const SET_COLUMN_ADDRESS: u8 = 0x21;

/// Set page address window command (0x22)
///
/// Requires 2 bytes: [start page, end page]
pub const SET_PAGE_ADDRESS: u8 = 0x22;

// Hardware configuration commands

/// Set display start line command (0x40 | line)
///
/// The low 6 bits select the RAM row mapped to COM0.
pub const SET_START_LINE: u8 = 0x40;

/// Segment remap command (0xA0 | remap)
///
/// 0xA0 maps column 0 to SEG0, 0xA1 maps column 127 to SEG0.
pub const SET_SEGMENT_REMAP: u8 = 0xA0;

/// Set multiplex ratio command (0xA8)
///
/// Requires 1 byte: number of rows - 1.
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;

/// COM output scan direction, normal (0xC0)
pub const COM_SCAN_INCREMENT: u8 = 0xC0;

/// COM output scan direction, remapped (0xC8)
pub const COM_SCAN_DECREMENT: u8 = 0xC8;

/// Set display offset command (0xD3)
///
/// Requires 1 byte: vertical shift by COM, 0..=63.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration command (0xDA)
///
/// Requires 1 byte: 0x02 = sequential (128x32, 96x16),
/// 0x12 = alternative (128x64 and most other panels).
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving scheme commands

/// Set display clock divide ratio / oscillator frequency command (0xD5)
///
/// Requires 1 byte. 0x80 is the power-on reset value.
pub const SET_CLOCK_DIVIDE: u8 = 0xD5;

/// Set pre-charge period command (0xD9)
///
/// Requires 1 byte: phase 1 in the low nibble, phase 2 in the high nibble.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level command (0xDB)
///
/// Requires 1 byte.
pub const SET_VCOM_DESELECT: u8 = 0xDB;

// Charge pump

/// Charge pump setting command (0x8D)
///
/// Requires 1 byte: 0x14 = enable (internal VCC), 0x10 = disable.
pub const SET_CHARGE_PUMP: u8 = 0x8D;

/// Charge pump enable argument for [`SET_CHARGE_PUMP`]
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;

/// Charge pump disable argument for [`SET_CHARGE_PUMP`]
pub const CHARGE_PUMP_DISABLE: u8 = 0x10;
