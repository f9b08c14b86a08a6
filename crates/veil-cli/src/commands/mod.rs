pub mod analyze;
pub mod capacity;
pub mod hide;
pub mod unveil;
pub mod unveil_image;
pub mod unveil_raw;
