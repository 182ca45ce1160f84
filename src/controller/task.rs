//! Blink controller task
//!
//! Waits for button edges with the blink period as timeout, feeds each
//! wake-up through the state machine and drives the LED when it advances.

use crate::led::LedOutput;
use crate::signal::{EdgeWait, Wake};

use super::config::BlinkConfig;
use super::state::{BlinkState, LedState, Transition};

/// Blink controller
///
/// Owns the consumer end of the edge handoff and the LED output. All state
/// lives here, in task context.
pub struct BlinkController<E, L> {
    edges: E,
    led: L,
    config: BlinkConfig,
    state: BlinkState,
}

impl<E: EdgeWait, L: LedOutput> BlinkController<E, L> {
    /// Create a controller in the initial state. Clears the LED.
    pub fn new(edges: E, mut led: L, config: BlinkConfig) -> Self {
        led.clear();
        Self {
            edges,
            led,
            config,
            state: BlinkState::initial(),
        }
    }

    /// Current state
    pub fn state(&self) -> BlinkState {
        self.state
    }

    /// Run one wait/decide/apply cycle
    pub async fn tick(&mut self) -> Transition {
        let wake = self.edges.wait_edge(self.config.period_ms()).await;
        let transition = self.state.step(wake, self.config.mode());

        if wake == Wake::Edge {
            log::debug!("Button edge, toggle now {}", transition.next.toggle);
        }

        if transition.advanced {
            log::info!("Turning the LED {}!", transition.next.led);
            match transition.next.led {
                LedState::On => self.led.render(self.config.color()),
                LedState::Off => self.led.clear(),
            }
        }

        self.state = transition.next;
        transition
    }

    /// Run forever
    pub async fn run(mut self) -> ! {
        log::info!(
            "Blink controller started: period {} ms, mode {:?}",
            self.config.period_ms(),
            self.config.mode()
        );
        loop {
            self.tick().await;
        }
    }
}
