//! Transport abstraction
//!
//! This module provides the [`Transport`] trait and the [`I2cInterface`] struct
//! for communicating with the SSD1306 controller over I2C.
//!
//! ## Hardware Requirements
//!
//! The SSD1306 I2C modules only need the two bus lines (SDA + SCL). Bus
//! set-up (pins, clock) happens in board code; the interface just owns a
//! ready [`I2c`] implementation and the device address.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{I2c, Operation};
//! use ssd1306_text::{I2cInterface, Transport};
//! # use core::convert::Infallible;
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
//! // Create interface with the bus and the module address
//! let mut interface = I2cInterface::new(MockI2c, 0x3C);
//!
//! // Send a command
//! let _ = interface.write_commands(&[0xAF]); // Display on
//!
//! // Send display RAM data
//! let _ = interface.write_frame(&[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{I2c, Operation};

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};
use crate::config::BusConfig;

/// Trait for the bus connection to the SSD1306 controller
///
/// This trait abstracts over different bus implementations,
/// allowing the [`DisplayController`](crate::display::DisplayController) to
/// work with anything that can deliver command and data streams.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`] struct. If your module
/// is wired differently (e.g. SPI with a D/C pin), implement this trait on
/// your own type.
pub trait Transport {
    /// Error type for transport operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send command bytes (and their arguments) to the controller
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    fn write_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error>;

    /// Send display RAM data to the controller
    ///
    /// Called once per flush with the complete framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    fn write_frame(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// I2C transport for SSD1306 modules
///
/// Implements [`Transport`] for embedded-hal v1.0 [`I2c`] buses. Each write is
/// a single transaction: the control byte followed by the payload, with no
/// repeated start in between.
///
/// ## Example
///
/// ```rust,no_run
/// use ssd1306_text::{Builder, Dimensions, DisplayController, I2cInterface};
/// # use core::convert::Infallible;
/// # use embedded_hal::i2c::{I2c, Operation};
/// # struct MockI2c;
/// # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # let dims = match Dimensions::new(128, 32) {
/// #     Ok(dims) => dims,
/// #     Err(_) => return,
/// # };
/// # let config = match Builder::new().dimensions(dims).build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let interface = I2cInterface::from_bus(MockI2c, &config.bus);
///
/// // Use with DisplayController
/// let _display = DisplayController::new(interface, config);
/// ```
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface for the device at `address`
    ///
    /// # Arguments
    ///
    /// * `i2c` - I2C bus (must implement [`I2c`])
    /// * `address` - 7-bit device address (typically `0x3C` or `0x3D`)
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Create a new interface using the address from a [`BusConfig`]
    pub fn from_bus(i2c: I2C, bus: &BusConfig) -> Self {
        Self::new(i2c, bus.address)
    }

    /// Get the device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn write_with_control(&mut self, control: u8, payload: &[u8]) -> Result<(), I2C::Error> {
        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&[control]), Operation::Write(payload)],
        )
    }
}

impl<I2C> Transport for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error> {
        self.write_with_control(CONTROL_COMMAND, commands)
    }

    fn write_frame(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.write_with_control(CONTROL_DATA, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource};

    #[derive(Debug, Default)]
    struct MockI2c {
        /// (address, concatenated bytes of one transaction)
        transactions: Vec<(u8, Vec<u8>)>,
        nack: bool,
    }

    #[derive(Debug, Clone, Copy)]
    struct MockError;

    impl embedded_hal::i2c::Error for MockError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
        }
    }

    impl ErrorType for MockI2c {
        type Error = MockError;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.nack {
                return Err(MockError);
            }
            let mut bytes = Vec::new();
            for op in operations.iter() {
                if let Operation::Write(data) = op {
                    bytes.extend_from_slice(data);
                }
            }
            self.transactions.push((address, bytes));
            Ok(())
        }
    }

    #[test]
    fn test_commands_prefixed_with_command_control_byte() {
        let mut interface = I2cInterface::new(MockI2c::default(), 0x3C);
        interface.write_commands(&[0x81, 0x7F]).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.transactions.len(), 1);
        assert_eq!(i2c.transactions[0], (0x3C, alloc::vec![0x00, 0x81, 0x7F]));
    }

    #[test]
    fn test_frame_prefixed_with_data_control_byte() {
        let mut interface = I2cInterface::new(MockI2c::default(), 0x3D);
        interface.write_frame(&[0xAA; 4]).unwrap();

        let i2c = interface.release();
        assert_eq!(
            i2c.transactions[0],
            (0x3D, alloc::vec![0x40, 0xAA, 0xAA, 0xAA, 0xAA])
        );
    }

    #[test]
    fn test_from_bus_uses_configured_address() {
        let bus = BusConfig {
            address: 0x3D,
            ..BusConfig::default()
        };
        let interface = I2cInterface::from_bus(MockI2c::default(), &bus);
        assert_eq!(interface.address(), 0x3D);
    }

    #[test]
    fn test_nack_is_returned() {
        let i2c = MockI2c {
            nack: true,
            ..MockI2c::default()
        };
        let mut interface = I2cInterface::new(i2c, 0x3C);
        assert!(interface.write_frame(&[0x00]).is_err());
    }
}
