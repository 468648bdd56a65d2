//! Pixel-space rectangles and resolution-normalized regions.

mod common;

pub mod pixel;
pub use pixel::*;

pub mod ratio;
pub use ratio::*;
