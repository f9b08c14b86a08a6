mod lsb_codec;
pub mod wav_iter;

pub use lsb_codec::LsbCodec;
pub use wav_iter::WavAudio;
