//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//!
//! ## Example
//!
//! ```
//! use ssd1306_text::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(128, 20); // Not a whole number of pages
//! assert!(result.is_err());
//! ```

use crate::interface::Transport;

/// Maximum segment outputs (columns) supported by SSD1306 controller
pub const MAX_COLUMNS: u16 = 128;

/// Maximum COM outputs (rows) supported by SSD1306 controller
///
/// NOTE: 32 row modules only wire half of the COM outputs; configure
/// [`crate::Dimensions`] accordingly.
pub const MAX_ROWS: u16 = 64;

/// Errors that can occur when interacting with the display
///
/// Generic over the transport type to preserve the specific error type.
/// This allows error handling code to match on the underlying bus error.
#[derive(Debug)]
pub enum Error<T: Transport> {
    /// Transport error (bus write failed, e.g. address not acknowledged)
    ///
    /// Wraps the underlying error from the [`Transport`] implementation.
    Transport(T::Error),
    /// Text would not fit inside the framebuffer
    ///
    /// Nothing is drawn when this is returned.
    OutOfBounds {
        /// X coordinate of the rejected text box
        x: i32,
        /// Y coordinate of the rejected text box
        y: i32,
        /// Width of the rejected text box in pixels
        width: u32,
        /// Height of the rejected text box in pixels
        height: u32,
    },
}

impl<T: Transport> core::fmt::Display for Error<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Transport error: {e:?}"),
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "Out of bounds: {width}x{height} box at ({x}, {y}) exceeds framebuffer"
            ),
        }
    }
}

impl<T: Transport + core::fmt::Debug> core::error::Error for Error<T> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug)]
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
        width: u16,
        /// Height in pixels requested
        height: u16,
    },
    /// Device address does not fit in 7 bits
    InvalidAddress(u8),
    /// Bus frequency must be non-zero
    InvalidFrequency(u32),
    /// Column offset plus width exceeds the controller's RAM columns
    InvalidColumnOffset {
        /// First RAM column requested
        offset: u8,
        /// Display width in pixels
        width: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_COLUMNS}x{MAX_ROWS}, height must be multiple of 8)"
            ),
            Self::InvalidAddress(address) => {
                write!(f, "Invalid I2C address 0x{address:02X} (must be 7-bit)")
            }
            Self::InvalidFrequency(hz) => write!(f, "Invalid bus frequency {hz} Hz"),
            Self::InvalidColumnOffset { offset, width } => write!(
                f,
                "Invalid column offset {offset} for width {width} (max {MAX_COLUMNS} columns)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
