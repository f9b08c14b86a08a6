pub mod analysis;
pub mod decoder;
pub mod encoder;
mod lsb_codec;
pub mod resize;

pub use analysis::lsb_plane;
pub use lsb_codec::LsbCodec;
pub use resize::fit_secret;
