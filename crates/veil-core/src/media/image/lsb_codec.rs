use std::io::{Read, Write};

use image::RgbImage;

use super::decoder::ImageRgbColor;
use super::encoder::ImageRgbColorMut;
use crate::universal_decoder::Decoder;
use crate::universal_encoder::Encoder;

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Image Decoder that implements Read
    pub fn decoder(input: &RgbImage) -> Box<dyn Read + '_> {
        Box::new(Decoder::new(ImageRgbColor::new(input)))
    }

    /// builds a LSB Image Encoder that implements Write
    pub fn encoder(carrier: &mut RgbImage) -> Box<dyn Write + '_> {
        Box::new(Encoder::new(ImageRgbColorMut::new(carrier)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn it_should_encode_and_decode_in_chunks_by_using_read_to_end() {
        let mut carrier = RgbImage::from_fn(64, 64, |x, y| Rgb([x as u8, y as u8, 0x7f]));
        let secret = include_bytes!("lsb_codec.rs");
        let secret = &secret[..secret.len().min(64 * 64 * 3 / 8)];
        {
            let mut codec = LsbCodec::encoder(&mut carrier);
            let half = secret.len() / 2;
            codec
                .write_all(&secret[..half])
                .expect("Cannot write half the buffer to codec");
            codec
                .write_all(&secret[half..])
                .expect("Cannot write the other half of the buffer to codec");
        }

        let mut unveiled = Vec::new();
        LsbCodec::decoder(&carrier)
            .read_to_end(&mut unveiled)
            .expect("Cannot read from codec");

        assert_eq!(&unveiled[..secret.len()], secret);
    }

    #[test]
    fn it_should_leave_channels_past_the_payload_untouched() {
        let mut carrier = RgbImage::from_pixel(4, 4, Rgb([0xff, 0xff, 0xff]));

        LsbCodec::encoder(&mut carrier)
            .write_all(&[0])
            .expect("Cannot write one byte");

        let untouched = carrier.as_raw().iter().skip(8).all(|c| *c == 0xff);
        assert!(untouched, "only the first 8 channels should carry data");
        assert!(carrier.as_raw().iter().take(8).all(|c| *c == 0xfe));
    }
}
