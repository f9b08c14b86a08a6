//! File based builders around [`crate::commands`], one per use case.

pub mod hide;
mod shared;
pub mod unveil;
pub mod unveil_image;
pub mod unveil_raw;

pub use shared::*;
