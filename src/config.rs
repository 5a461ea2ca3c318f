//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Default 7-bit I2C address of SSD1306 modules (SA0 low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (segment outputs)
    pub width: u16,
    /// Height in pixels (COM outputs)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width is 0 or > MAX_COLUMNS
    /// - height is 0 or > MAX_ROWS
    /// - height is not a multiple of 8 (rows are packed into 8-pixel pages)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_ROWS || !height.is_multiple_of(8) {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u16 {
        self.height / 8
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        (self.width as usize * self.height as usize) / 8
    }
}

/// Display rotation relative to native orientation
///
/// The SSD1306 flips its output in hardware, so rotation only changes the
/// segment remap and COM scan direction; the framebuffer layout is the same.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// Native orientation for the common module wiring
    #[default]
    Rotate0,
    /// Rotate 180 degrees
    Rotate180,
}

/// Two-wire bus settings for the board the display is attached to
///
/// The driver itself only uses `address`; the pins and frequency are carried
/// so board start-up code can build the bus from the same configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BusConfig {
    /// GPIO number of the SDA line
    pub sda_pin: u8,
    /// GPIO number of the SCL line
    pub scl_pin: u8,
    /// Bus clock in hertz
    pub frequency_hz: u32,
    /// 7-bit device address
    pub address: u8,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            sda_pin: 18,
            scl_pin: 23,
            frequency_hz: 100_000,
            address: DEFAULT_ADDRESS,
        }
    }
}

/// Pauses used by the demonstration sequence
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemoTiming {
    /// Pause after each text line is shown
    pub line_pause_ms: u32,
    /// Pause after each scroll step is shown
    pub scroll_step_ms: u32,
    /// Number of one-row scroll steps (`None` scrolls the full display height)
    pub scroll_steps: Option<u16>,
}

impl Default for DemoTiming {
    fn default() -> Self {
        Self {
            line_pause_ms: 2_000,
            scroll_step_ms: 100,
            scroll_steps: None,
        }
    }
}

/// Display configuration
///
/// This struct holds all configurable parameters for the SSD1306 controller.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Display rotation
    pub rotation: Rotation,
    /// Bus wiring and device address
    pub bus: BusConfig,
    /// Contrast applied during initialization
    pub contrast: u8,
    /// Whether the panel is powered from an external VCC (charge pump off)
    pub external_vcc: bool,
    /// COM pins hardware configuration byte
    pub com_pins: u8,
    /// First RAM column driven by the panel
    pub column_offset: u8,
    /// Demonstration sequence pauses
    pub timing: DemoTiming,
}

impl Config {
    /// Number of scroll steps the demonstration sequence performs
    pub fn scroll_steps(&self) -> u16 {
        self.timing.scroll_steps.unwrap_or(self.dimensions.height)
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use ssd1306_text::{Builder, Dimensions, Rotation};
///
/// let dims = match Dimensions::new(128, 32) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).rotation(Rotation::Rotate0).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Display rotation
    rotation: Rotation,
    /// Bus wiring and device address
    bus: BusConfig,
    /// Contrast applied during initialization
    contrast: u8,
    /// Whether the panel is powered from an external VCC
    external_vcc: bool,
    /// COM pins override (derived from dimensions when unset)
    com_pins: Option<u8>,
    /// Column offset override (derived from dimensions when unset)
    column_offset: Option<u8>,
    /// Demonstration sequence pauses
    timing: DemoTiming,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            rotation: Rotation::Rotate0,
            bus: BusConfig::default(),
            // Full brightness, the controller default after init in most drivers
            contrast: 0xFF,
            external_vcc: false,
            com_pins: None,
            column_offset: None,
            timing: DemoTiming::default(),
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

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set bus wiring and device address
    pub fn bus(mut self, bus: BusConfig) -> Self {
        self.bus = bus;
        self
    }

    /// Set the 7-bit device address
    pub fn address(mut self, address: u8) -> Self {
        self.bus.address = address;
        self
    }

    /// Set contrast
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set whether the panel uses an external VCC supply
    pub fn external_vcc(mut self, value: bool) -> Self {
        self.external_vcc = value;
        self
    }

    /// Override the COM pins hardware configuration byte
    pub fn com_pins(mut self, value: u8) -> Self {
        self.com_pins = Some(value);
        self
    }

    /// Override the first RAM column driven by the panel
    pub fn column_offset(mut self, value: u8) -> Self {
        self.column_offset = Some(value);
        self
    }

    /// Set the demonstration sequence pauses
    pub fn timing(mut self, timing: DemoTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set,
    /// `BuilderError::InvalidAddress` for addresses above 0x7F,
    /// `BuilderError::InvalidFrequency` for a zero bus clock and
    /// `BuilderError::InvalidColumnOffset` if the column window runs past
    /// the last RAM column.
    pub fn build(self) -> Result<Config, BuilderError> {
        let dimensions = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        if self.bus.address > 0x7F {
            return Err(BuilderError::InvalidAddress(self.bus.address));
        }
        if self.bus.frequency_hz == 0 {
            return Err(BuilderError::InvalidFrequency(self.bus.frequency_hz));
        }

        // Wide, short panels (128x32, 96x16) wire COM pins sequentially
        let com_pins = self.com_pins.unwrap_or(if dimensions.width > 2 * dimensions.height {
            0x02
        } else {
            0x12
        });
        // 64 pixel wide panels are centered in the 128 column RAM
        let column_offset = self
            .column_offset
            .unwrap_or(if dimensions.width == 64 { 32 } else { 0 });
        if u16::from(column_offset) + dimensions.width > MAX_COLUMNS {
            return Err(BuilderError::InvalidColumnOffset {
                offset: column_offset,
                width: dimensions.width,
            });
        }

        Ok(Config {
            dimensions,
            rotation: self.rotation,
            bus: self.bus,
            contrast: self.contrast,
            external_vcc: self.external_vcc,
            com_pins,
            column_offset,
            timing: self.timing,
        })
    }
}
