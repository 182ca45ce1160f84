//! Button interrupt handler body
//!
//! The GPIO interrupt is shared by every pin, so the handler first checks
//! that the button raised it, acknowledges it and posts an edge. It never
//! blocks and never touches the LED.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::signal::EdgeSender;

/// Interrupt status of a GPIO input
pub trait InterruptPin {
    /// Whether this pin has a pending interrupt
    fn is_interrupt_set(&self) -> bool;

    /// Acknowledge the pending interrupt
    fn clear_interrupt(&mut self);
}

/// Handle a GPIO interrupt for the button line.
///
/// Returns true if the button raised it and an edge was posted.
pub fn on_rising_edge<P, M>(pin: &mut P, edges: &EdgeSender<'_, M>) -> bool
where
    P: InterruptPin,
    M: RawMutex,
{
    if !pin.is_interrupt_set() {
        return false;
    }
    pin.clear_interrupt();
    edges.post();
    true
}

#[cfg(test)]
pub mod mock {
    //! Mock interrupt pin for testing

    use super::*;

    /// Pin whose interrupt flag is set by the test
    pub struct MockPin {
        pending: bool,
        cleared: usize,
    }

    impl MockPin {
        pub fn new() -> Self {
            Self {
                pending: false,
                cleared: 0,
            }
        }

        /// Simulate the hardware latching a rising edge
        pub fn raise(&mut self) {
            self.pending = true;
        }

        /// Number of times the interrupt was acknowledged
        pub fn cleared(&self) -> usize {
            self.cleared
        }
    }

    impl Default for MockPin {
        fn default() -> Self {
            Self::new()
        }
    }

    impl InterruptPin for MockPin {
        fn is_interrupt_set(&self) -> bool {
            self.pending
        }

        fn clear_interrupt(&mut self) {
            self.pending = false;
            self.cleared += 1;
        }
    }
}
