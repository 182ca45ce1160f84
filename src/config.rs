//! Hardware configuration constants for the ESP32-S3 DevKitC blink board

/// Addressable LED (on-board WS2812)
pub mod led {
    /// Data pin of the on-board pixel, driven from SPI2 MOSI.
    /// `main` selects `GPIO48` by type; change both together.
    pub const PIN: u8 = 48;

    /// Number of pixels on the strip
    pub const STRIP_LEN: usize = 1;

    /// SPI clock for the ws2812 encoder (must stay within 2-3.8 MHz)
    pub const SPI_FREQUENCY_KHZ: u32 = 3_200;
}

/// Button input
pub mod button {
    /// BOOT button, active low with pull-up. Edge of interest is the release.
    /// `main` selects `GPIO0` by type; change both together.
    pub const PIN: u8 = 0;
}

/// Default blink configuration
pub mod blink_defaults {
    /// Wait timeout, doubling as the idle auto-blink interval
    pub const PERIOD_MS: u32 = 1000;

    /// Dim white, as (red, green, blue)
    pub const COLOR: (u8, u8, u8) = (16, 16, 16);
}

/// Logging
pub mod logging {
    use log::LevelFilter;

    pub const LEVEL: LevelFilter = LevelFilter::Info;
}
