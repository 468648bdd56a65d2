//! Label rows for captured frames and the per-format dataset emitters.

mod common;

pub mod emit;
pub use emit::*;

pub mod row;
pub use row::*;
