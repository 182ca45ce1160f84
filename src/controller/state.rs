//! Blink state machine
//!
//! The controller's whole state is an LED state plus a latched toggle flag.
//! [`BlinkState::step`] is the transition rule as a pure function of the
//! current state, the outcome of the last wait and the configured mode.

use core::fmt;

use crate::signal::Wake;

/// What the LED is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedState {
    On,
    Off,
}

impl LedState {
    /// The opposite state
    pub fn flipped(self) -> Self {
        match self {
            LedState::On => LedState::Off,
            LedState::Off => LedState::On,
        }
    }
}

impl fmt::Display for LedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedState::On => f.write_str("ON"),
            LedState::Off => f.write_str("OFF"),
        }
    }
}

/// Decision rule applied after each wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkMode {
    /// Turn on once when idle; after a press only edges change the LED
    Latched,
    /// A press arms continuous blinking, the next press disarms it
    ArmedBlink,
    /// Blink every period regardless of the button
    FreeRunning,
}

/// LED state plus the toggle flag latched by consumed edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkState {
    pub led: LedState,
    pub toggle: bool,
}

/// Result of applying one wake-up to a [`BlinkState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// What woke the controller
    pub wake: Wake,
    /// State after the step
    pub next: BlinkState,
    /// Whether the LED must be updated to `next.led`
    pub advanced: bool,
}

impl BlinkState {
    /// Power-on state: LED off, no manual toggle
    pub const fn initial() -> Self {
        Self {
            led: LedState::Off,
            toggle: false,
        }
    }

    /// Apply one wake-up.
    ///
    /// An edge always flips `toggle`; a timeout leaves it alone. Whether the
    /// LED advances is decided by `mode`.
    pub fn step(self, wake: Wake, mode: BlinkMode) -> Transition {
        let edge = wake == Wake::Edge;
        let toggle = if edge { !self.toggle } else { self.toggle };
        let idle_off = self.led == LedState::Off;

        let advanced = match mode {
            BlinkMode::Latched => edge || (!toggle && idle_off),
            BlinkMode::ArmedBlink => toggle || idle_off,
            BlinkMode::FreeRunning => true,
        };

        let led = if advanced { self.led.flipped() } else { self.led };

        Transition {
            wake,
            next: BlinkState { led, toggle },
            advanced,
        }
    }
}

impl Default for BlinkState {
    fn default() -> Self {
        Self::initial()
    }
}
