mod crypted;
mod factory;
mod frame;
mod image_frame;
mod termination;

pub use crypted::*;
pub use factory::*;
pub use frame::*;
pub use image_frame::*;
pub use termination::*;
