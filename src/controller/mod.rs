pub mod config;
pub mod state;
pub mod task;

pub use config::{BlinkConfig, ConfigError};
pub use state::{BlinkMode, BlinkState, LedState, Transition};
pub use task::BlinkController;
