//! LED output trait for abstraction and testability
//!
//! The controller drives the LED through this trait so the strip driver can
//! be replaced with a recording mock in tests.

pub use smart_leds::RGB8;

/// Abstract LED output
///
/// Both operations are synchronous, idempotent and infallible at this layer.
/// They are only ever called from task context.
pub trait LedOutput {
    /// Light the LED with `color`
    fn render(&mut self, color: RGB8);

    /// Turn the LED off
    fn clear(&mut self);
}
