pub mod edge;
pub mod traits;

pub use edge::{EdgeReceiver, EdgeSender, EdgeSignal, InitError};
pub use traits::{EdgeWait, Wake};
