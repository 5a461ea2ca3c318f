//! Workshop demonstration sequence
//!
//! Clears the panel, shows two lines of text, scrolls them off the top of the
//! screen one row at a time and finishes with a farewell line.
//!
//! Board start-up code owns the bus; this module only needs a ready
//! [`DisplayController`] and a delay provider:
//!
//! ```rust,ignore
//! let config = Builder::new().dimensions(Dimensions::new(128, 32)?).build()?;
//! let i2c = I2c::new(peripherals.I2C0, sda, scl, config.bus.frequency_hz.Hz());
//! let mut display = DisplayController::new(I2cInterface::from_bus(i2c, &config.bus), config);
//! demo::run(&mut display, &mut delay)?;
//! ```

use embedded_hal::delay::DelayNs;

use crate::display::DisplayController;
use crate::error::Error;
use crate::interface::Transport;

/// First line, drawn at the top of the screen
pub const GREETING: &str = "Hello FEKT!";

/// Second line, drawn at row 16
pub const BOARD_LABEL: &str = "ESP32";

/// Last line, drawn after the scroll
pub const FAREWELL: &str = "Enjoy workshop!";

/// Row of the second line
pub const BOARD_LABEL_ROW: i32 = 16;

/// Run the sequence once, top to bottom
///
/// `init → clear → flush → greeting → flush → pause → label → flush → pause →
/// [scroll up one row → flush → pause] × steps → farewell → flush`
///
/// Pauses come from the controller's [`DemoTiming`](crate::DemoTiming).
///
/// # Errors
///
/// Stops at the first failure. A transport error means the display is gone,
/// so there is nothing to continue with.
pub fn run<T, D>(display: &mut DisplayController<T>, delay: &mut D) -> Result<(), Error<T>>
where
    T: Transport,
    D: DelayNs,
{
    let timing = display.config().timing;
    let steps = display.config().scroll_steps();

    display.init()?;

    // Clear the panel in case it has junk on it
    display.clear();
    display.flush()?;

    display.draw_text(GREETING, 0, 0)?;
    display.flush()?;
    delay.delay_ms(timing.line_pause_ms);

    display.draw_text(BOARD_LABEL, 0, BOARD_LABEL_ROW)?;
    display.flush()?;
    delay.delay_ms(timing.line_pause_ms);

    log::info!("scrolling {} rows", steps);
    for _ in 0..steps {
        display.scroll(0, -1);
        display.flush()?;
        delay.delay_ms(timing.scroll_step_ms);
    }

    display.draw_text(FAREWELL, 0, 0)?;
    display.flush()?;
    log::info!("demo finished");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, DemoTiming, Dimensions};
    use alloc::vec::Vec;
    use embedded_graphics_core::pixelcolor::BinaryColor;

    #[derive(Debug, Default)]
    struct MockTransport {
        frames: Vec<Vec<u8>>,
        frames_before_failure: Option<usize>,
    }

    #[derive(Debug)]
    struct Nack;

    impl Transport for MockTransport {
        type Error = Nack;

        fn write_commands(&mut self, _commands: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write_frame(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            if self.frames_before_failure == Some(self.frames.len()) {
                return Err(Nack);
            }
            self.frames.push(data.to_vec());
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockDelay {
        pauses_ms: Vec<u32>,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.pauses_ms.push(ms);
        }
    }

    fn test_display(timing: DemoTiming) -> DisplayController<MockTransport> {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 32).unwrap())
            .timing(timing)
            .build()
            .unwrap();
        DisplayController::new(MockTransport::default(), config)
    }

    #[test]
    fn test_sequence_frame_count() {
        let mut display = test_display(DemoTiming::default());
        let mut delay = MockDelay::default();
        run(&mut display, &mut delay).unwrap();

        // clear + two lines + 32 scroll steps + farewell
        let transport = display.release();
        assert_eq!(transport.frames.len(), 36);
        assert!(transport.frames[0].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_sequence_pauses() {
        let mut display = test_display(DemoTiming::default());
        let mut delay = MockDelay::default();
        run(&mut display, &mut delay).unwrap();

        assert_eq!(delay.pauses_ms.len(), 34);
        assert_eq!(&delay.pauses_ms[..2], &[2_000, 2_000]);
        assert!(delay.pauses_ms[2..].iter().all(|ms| *ms == 100));
    }

    #[test]
    fn test_full_scroll_leaves_only_farewell() {
        let mut display = test_display(DemoTiming::default());
        let mut delay = MockDelay::default();
        run(&mut display, &mut delay).unwrap();

        // everything scrolled out before the farewell was drawn
        let fb = display.framebuffer();
        for y in 10..fb.height() {
            for x in 0..fb.width() {
                assert_eq!(fb.pixel(x, y), Some(BinaryColor::Off));
            }
        }

        let transport = display.release();
        let before_farewell = &transport.frames[transport.frames.len() - 2];
        assert!(before_farewell.iter().all(|b| *b == 0));
    }

    #[test]
    fn test_custom_timing() {
        let timing = DemoTiming {
            line_pause_ms: 5,
            scroll_step_ms: 1,
            scroll_steps: Some(4),
        };
        let mut display = test_display(timing);
        let mut delay = MockDelay::default();
        run(&mut display, &mut delay).unwrap();

        assert_eq!(delay.pauses_ms, alloc::vec![5, 5, 1, 1, 1, 1]);
        let transport = display.release();
        assert_eq!(transport.frames.len(), 8);
    }

    #[test]
    fn test_partial_scroll_keeps_shifted_text() {
        let timing = DemoTiming {
            line_pause_ms: 0,
            scroll_step_ms: 0,
            scroll_steps: Some(4),
        };
        let mut display = test_display(timing);
        let mut delay = MockDelay::default();
        run(&mut display, &mut delay).unwrap();

        // "ESP32" moved from rows 16..26 to 12..22
        let fb = display.framebuffer();
        let mut label_rows = false;
        for y in 12..22 {
            for x in 0..30 {
                if fb.pixel(x, y) == Some(BinaryColor::On) {
                    label_rows = true;
                }
            }
        }
        assert!(label_rows);
        for y in 22..fb.height() {
            for x in 0..fb.width() {
                assert_eq!(fb.pixel(x, y), Some(BinaryColor::Off));
            }
        }
    }

    #[test]
    fn test_transport_failure_stops_sequence() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 32).unwrap())
            .build()
            .unwrap();
        let transport = MockTransport {
            frames_before_failure: Some(2),
            ..MockTransport::default()
        };
        let mut display = DisplayController::new(transport, config);
        let mut delay = MockDelay::default();

        let result = run(&mut display, &mut delay);
        assert!(matches!(result, Err(Error::Transport(Nack))));
        // one pause after the greeting, none after the failed label flush
        assert_eq!(delay.pauses_ms, alloc::vec![2_000]);
    }
}
