//! Single-slot edge signal
//!
//! One producer (the GPIO interrupt handler) posts, one consumer (the blink
//! controller) takes. The slot holds at most one pending notification, so
//! several posts before the consumer looks collapse into one edge.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};
use static_cell::StaticCell;

use crate::signal::traits::{EdgeWait, Wake};

/// Errors raised while bringing up the edge handoff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    /// The static slot backing the signal was already claimed
    EdgeSignalUnavailable,
}

/// Single-slot wake-up primitive shared between interrupt and task context
pub struct EdgeSignal<M: RawMutex> {
    signal: Signal<M, ()>,
}

impl<M: RawMutex> EdgeSignal<M> {
    /// Create an empty signal with nothing pending.
    pub const fn new() -> Self {
        Self {
            signal: Signal::new(),
        }
    }

    /// Claim the signal stored in `cell` and split it into its two handles.
    ///
    /// Fails if the cell was already claimed; there is no way to run without
    /// the handoff, so callers treat this as fatal.
    pub fn claim(
        cell: &'static StaticCell<Self>,
    ) -> Result<(EdgeSender<'static, M>, EdgeReceiver<'static, M>), InitError> {
        let signal = cell
            .try_init(Self::new())
            .ok_or(InitError::EdgeSignalUnavailable)?;
        Ok(signal.split())
    }

    /// Split into the producer and consumer handles.
    ///
    /// Takes `&mut self` so only one pair can exist per signal.
    pub fn split(&mut self) -> (EdgeSender<'_, M>, EdgeReceiver<'_, M>) {
        let signal = &self.signal;
        (EdgeSender { signal }, EdgeReceiver { signal })
    }
}

impl<M: RawMutex> Default for EdgeSignal<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle. Safe to use from interrupt context: never blocks.
pub struct EdgeSender<'a, M: RawMutex> {
    signal: &'a Signal<M, ()>,
}

impl<M: RawMutex> EdgeSender<'_, M> {
    /// Mark an edge as pending and wake the consumer if it is waiting.
    pub fn post(&self) {
        self.signal.signal(());
    }
}

/// Consumer handle, owned by the blink controller
pub struct EdgeReceiver<'a, M: RawMutex> {
    signal: &'a Signal<M, ()>,
}

impl<M: RawMutex> EdgeReceiver<'_, M> {
    /// Consume a pending edge without waiting. Returns true if one was pending.
    pub fn try_take(&mut self) -> bool {
        self.signal.try_take().is_some()
    }

    /// Returns true if an edge is pending.
    pub fn is_pending(&self) -> bool {
        self.signal.signaled()
    }
}

impl<M: RawMutex> EdgeWait for EdgeReceiver<'_, M> {
    async fn wait_edge(&mut self, timeout_ms: u32) -> Wake {
        let timeout = Timer::after(Duration::from_millis(u64::from(timeout_ms)));
        match select(self.signal.wait(), timeout).await {
            Either::First(()) => Wake::Edge,
            Either::Second(()) => Wake::Timeout,
        }
    }
}
