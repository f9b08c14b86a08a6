use std::slice::IterMut;

use image::RgbImage;

use crate::media::MediaPrimitiveMut;

/// LSB target for image files, based on `RgbImage` by `image` crate
///
/// Hands out every color channel mutably, in the same order [`super::decoder::ImageRgbColor`] reads them.
pub struct ImageRgbColorMut<'i> {
    channels: IterMut<'i, u8>,
}

impl<'i> ImageRgbColorMut<'i> {
    pub fn new(input: &'i mut RgbImage) -> Self {
        let channels: &'i mut [u8] = input;

        Self {
            channels: channels.iter_mut(),
        }
    }
}

impl<'i> Iterator for ImageRgbColorMut<'i> {
    type Item = MediaPrimitiveMut<'i>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.channels.next().map(MediaPrimitiveMut::ImageColorChannel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.channels.size_hint()
    }
}
