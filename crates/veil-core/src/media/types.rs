use std::fs::File;
use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;

pub use hound::WavSpec;
use image::ImageError;
pub use image::{ImageFormat, RgbImage};
use log::{debug, error, warn};

use super::audio::WavAudio;
use super::payload::Termination;
use super::{CodecOptions, Persist};
use crate::error::VeilError;
use crate::result::Result;
use crate::universal_decoder::{bits_to_bytes, extract};

/// a media container for steganography
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    Image(RgbImage),
    Audio(WavAudio),
}

impl Media {
    pub fn from_image(img: RgbImage) -> Self {
        Self::Image(img)
    }

    /// Sniffs the content: a RIFF/WAVE header is audio, anything else must be a raster image.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if is_wave(bytes) {
            Self::audio_from_bytes(bytes)
        } else {
            Self::image_from_bytes(bytes)
        }
    }

    /// Decodes any supported raster format and normalizes it to 3 channel color.
    pub fn image_from_bytes(bytes: &[u8]) -> Result<Self> {
        rgb_image_from_bytes(bytes).map(Self::Image)
    }

    pub fn audio_from_bytes(bytes: &[u8]) -> Result<Self> {
        WavAudio::from_bytes(bytes).map(Self::Audio)
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        let mut bytes = Vec::new();
        File::open(f)?.read_to_end(&mut bytes)?;

        Self::from_bytes(&bytes)
    }

    /// number of LSB-bearing channels
    pub fn capacity_bits(&self) -> usize {
        match self {
            Media::Image(i) => i.as_raw().len(),
            Media::Audio(a) => a.frame_bytes().len(),
        }
    }

    /// how text and encrypted frames end on this kind of carrier
    pub fn termination(&self) -> Termination {
        match self {
            Media::Image(_) => Termination::NullByte,
            Media::Audio(_) => Termination::Sentinel,
        }
    }

    /// Embeds `data` bit by bit from the first channel on.
    ///
    /// Fails with [`VeilError::PayloadTooLarge`] before any channel is touched when `data` does not fit.
    pub fn hide_data(&mut self, data: &[u8]) -> Result<&mut Self> {
        let needed_bits = data.len() * 8;
        let capacity_bits = self.capacity_bits();
        if needed_bits > capacity_bits {
            warn!("Payload of {needed_bits} bits exceeds the carrier capacity of {capacity_bits} bits");
            return Err(VeilError::PayloadTooLarge {
                needed_bits,
                capacity_bits,
            });
        }
        debug!("Hiding {needed_bits} bits in a carrier of {capacity_bits} bits");

        match self {
            Media::Image(i) => super::image::LsbCodec::encoder(i)
                .write_all(data)
                .map_err(|e| {
                    error!("Error encoding image: {e}, kind {}", e.kind());
                    VeilError::ImageEncodingError
                })?,
            Media::Audio(a) => super::audio::LsbCodec::encoder(a)
                .write_all(data)
                .map_err(|e| {
                    error!("Error encoding audio: {e}, kind {}", e.kind());
                    VeilError::AudioEncodingError
                })?,
        }

        Ok(self)
    }

    /// LSB reader over all channels, in embedding order
    pub fn decoder(&self) -> Box<dyn Read + '_> {
        match self {
            Media::Image(i) => super::image::LsbCodec::decoder(i),
            Media::Audio(a) => super::audio::LsbCodec::decoder(a),
        }
    }

    /// The LSB of every channel packed into bytes, a trailing partial byte is dropped.
    pub fn unveil_bytes(&self) -> Vec<u8> {
        let bits = match self {
            Media::Image(i) => extract(super::image::decoder::ImageRgbColor::new(i)),
            Media::Audio(a) => extract(a.frame_iter()),
        };

        bits_to_bytes(&bits)
    }

    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W, opts: &CodecOptions) -> Result<()> {
        match self {
            Media::Image(i) => {
                ensure_lossless(opts.image_format)?;
                i.write_to(&mut writer, opts.image_format).map_err(|e| {
                    error!("Error saving image: {e}");
                    VeilError::ImageEncodingError
                })
            }
            Media::Audio(a) => a.write_to(writer),
        }
    }

    /// the carrier encoded as a file, ready to be stored or sent
    pub fn to_bytes(&self, opts: &CodecOptions) -> Result<Vec<u8>> {
        let mut out = Cursor::new(Vec::new());
        self.save_to_writer(&mut out, opts)?;

        Ok(out.into_inner())
    }
}

impl Persist for Media {
    fn save_as(&self, file: &Path, opts: &CodecOptions) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            VeilError::IoError(e)
        })?;
        self.save_to_writer(f, opts)
    }
}

/// Decodes any supported raster format into 3 channel color, palette, alpha and gray included.
pub fn rgb_image_from_bytes(bytes: &[u8]) -> Result<RgbImage> {
    let img = image::load_from_memory(bytes).map_err(|e| match e {
        ImageError::Unsupported(e) => {
            warn!("Unsupported image media: {e}");
            VeilError::UnsupportedMedia
        }
        e => {
            error!("Error reading image media: {e}");
            VeilError::InvalidImageMedia
        }
    })?;

    Ok(img.to_rgb8())
}

fn is_wave(bytes: &[u8]) -> bool {
    bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WAVE"
}

/// Only formats that keep every channel bit for bit can carry a payload.
pub fn ensure_lossless(format: ImageFormat) -> Result<()> {
    match format {
        ImageFormat::Png | ImageFormat::Bmp => Ok(()),
        other => {
            warn!("Refusing to write a carrier as {other:?}");
            Err(VeilError::UnsupportedOutputFormat(format!("{other:?}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{encode_image, prepare_gradient_image, prepare_wav};

    #[test]
    fn it_should_sniff_wave_and_image_content() {
        let wav = prepare_wav(16, &[1, 2, 3]);
        let png = encode_image(&prepare_gradient_image(4, 4), ImageFormat::Png);

        assert!(matches!(Media::from_bytes(&wav), Ok(Media::Audio(_))));
        assert!(matches!(Media::from_bytes(&png), Ok(Media::Image(_))));
    }

    #[test]
    fn it_should_refuse_content_that_is_neither_image_nor_wave() {
        let result = Media::from_bytes(b"[package]\nname = \"veil-core\"\n");

        assert!(matches!(result, Err(VeilError::UnsupportedMedia)));
    }

    #[test]
    fn it_should_refuse_a_broken_png() {
        let mut png = encode_image(&prepare_gradient_image(4, 4), ImageFormat::Png);
        png.truncate(20);

        let result = Media::image_from_bytes(&png);
        assert!(result.is_err());
    }

    #[test]
    fn it_should_fail_without_touching_the_carrier_when_data_is_too_large() {
        let img = prepare_gradient_image(4, 4);
        let mut media = Media::from_image(img.clone());

        // 4 * 4 * 3 = 48 bits = 6 bytes
        let result = media.hide_data(&[0xaa; 7]);
        assert!(matches!(
            result,
            Err(VeilError::PayloadTooLarge {
                needed_bits: 56,
                capacity_bits: 48
            })
        ));
        assert_eq!(media, Media::Image(img));
    }

    #[test]
    fn it_should_fill_the_carrier_up_to_the_last_byte() {
        let mut media = Media::from_image(prepare_gradient_image(4, 4));
        media.hide_data(b"abcdef").expect("6 bytes fit into 48 bits");

        assert_eq!(media.unveil_bytes(), b"abcdef");
    }

    #[test]
    fn it_should_refuse_lossy_output_formats() {
        let media = Media::from_image(prepare_gradient_image(4, 4));
        let opts = CodecOptions::default().with_image_format(ImageFormat::Jpeg);

        assert!(matches!(
            media.to_bytes(&opts),
            Err(VeilError::UnsupportedOutputFormat(_))
        ));
    }

    #[test]
    fn it_should_write_bmp_that_reads_back_identically() {
        let mut media = Media::from_image(prepare_gradient_image(9, 5));
        media.hide_data(b"bmp").expect("Cannot hide data");
        let opts = CodecOptions::default().with_image_format(ImageFormat::Bmp);

        let bytes = media.to_bytes(&opts).expect("Cannot write bmp");
        let reloaded = Media::from_bytes(&bytes).expect("Cannot read bmp");

        assert_eq!(reloaded, media);
    }
}
