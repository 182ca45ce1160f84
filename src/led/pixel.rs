//! LED output backed by an addressable pixel strip
//!
//! Works with any `smart_leds` writer; on the board that is a `ws2812-spi`
//! encoder on SPI2. Every pixel on the strip shows the same colour.

use core::fmt::Debug;
use core::iter;

use smart_leds::SmartLedsWrite;

use super::traits::{LedOutput, RGB8};

/// Pixel strip driven as a single LED
pub struct PixelLed<W> {
    strip: W,
    len: usize,
}

impl<W> PixelLed<W>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: Debug,
{
    /// Wrap a strip writer of `len` pixels
    pub fn new(strip: W, len: usize) -> Self {
        Self { strip, len }
    }

    fn fill(&mut self, color: RGB8) {
        // Hardware faults are not part of the output contract
        if let Err(e) = self.strip.write(iter::repeat(color).take(self.len)) {
            log::warn!("LED strip write failed: {:?}", e);
        }
    }
}

impl<W> LedOutput for PixelLed<W>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: Debug,
{
    fn render(&mut self, color: RGB8) {
        self.fill(color);
    }

    fn clear(&mut self) {
        self.fill(RGB8::default());
    }
}
