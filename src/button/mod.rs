#[cfg(feature = "embedded")]
pub mod esp;
pub mod isr;

pub use isr::{on_rising_edge, InterruptPin};
