pub mod pixel;
pub mod traits;

pub use pixel::PixelLed;
pub use traits::{LedOutput, RGB8};
