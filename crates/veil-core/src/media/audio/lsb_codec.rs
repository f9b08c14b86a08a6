use std::io::{Read, Write};

use super::WavAudio;
use crate::universal_decoder::Decoder;
use crate::universal_encoder::Encoder;

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Audio Decoder that implements Read
    pub fn decoder(input: &WavAudio) -> Box<dyn Read + '_> {
        Box::new(Decoder::new(input.frame_iter()))
    }

    /// builds a LSB Audio Encoder that implements Write
    pub fn encoder(input: &mut WavAudio) -> Box<dyn Write + '_> {
        Box::new(Encoder::new(input.frame_iter_mut()))
    }
}
