use std::slice::Iter;

use image::RgbImage;

use crate::media::MediaPrimitive;

/// LSB source for image files, based on `RgbImage` by `image` crate
///
/// Yields every color channel in row-major order (y outer, x inner), R, G, B per pixel.
///
/// ## Example of usage
/// ```rust
/// use std::io::Read;
/// use image::RgbImage;
/// use veil_core::universal_decoder::Decoder;
/// use veil_core::media::image::decoder::ImageRgbColor;
///
/// // 8 channels carry 'A' = 0b0100_0001 in their least significant bits
/// let image = RgbImage::from_raw(3, 1, vec![0, 1, 0, 0, 0, 0, 0, 1, 0])
///     .expect("Cannot build image");
/// let mut secret = [0; 1];
///
/// Decoder::new(ImageRgbColor::new(&image))
///     .read_exact(&mut secret)
///     .expect("Cannot read 1 byte from decoder");
///
/// assert_eq!(&secret, b"A");
/// ```
pub struct ImageRgbColor<'i> {
    channels: Iter<'i, u8>,
}

impl<'i> ImageRgbColor<'i> {
    /// constructor for a given `RgbImage` that lives somewhere
    pub fn new(input: &'i RgbImage) -> Self {
        Self {
            channels: input.as_raw().iter(),
        }
    }
}

impl Iterator for ImageRgbColor<'_> {
    type Item = MediaPrimitive;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.channels
            .next()
            .map(|c| MediaPrimitive::ImageColorChannel(*c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.channels.size_hint()
    }
}
