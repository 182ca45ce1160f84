//! Edge wait trait for abstraction and testability
//!
//! The controller only needs "wait up to N ms for an edge". This trait lets the
//! real embassy-backed receiver be swapped with a scripted source in tests.

use core::future::Future;

/// Outcome of one bounded wait for an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    /// At least one edge was posted since the last wait; it has been consumed
    Edge,
    /// The timeout expired with nothing pending
    Timeout,
}

/// Consumer side of the edge handoff
pub trait EdgeWait {
    /// Wait for an edge, giving up after `timeout_ms`.
    ///
    /// A pending edge is consumed before returning [`Wake::Edge`].
    fn wait_edge(&mut self, timeout_ms: u32) -> impl Future<Output = Wake>;
}
