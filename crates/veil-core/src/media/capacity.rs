use image::RgbImage;

/// Bits an image carrier offers: one LSB per channel, three channels per pixel.
pub const BITS_PER_PIXEL: u64 = 3;

/// How much payload an image carrier can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub width: u32,
    pub height: u32,
    pub pixels: u64,
    pub max_bits: u64,
    pub max_bytes: u64,
    /// `max_bytes` minus the one terminator byte
    pub max_chars: u64,
}

impl Capacity {
    pub fn compute(image: &RgbImage) -> Self {
        Self::of_dimensions(image.width(), image.height())
    }

    pub fn of_dimensions(width: u32, height: u32) -> Self {
        let pixels = u64::from(width) * u64::from(height);
        let max_bits = pixels * BITS_PER_PIXEL;
        let max_bytes = max_bits / 8;

        Self {
            width,
            height,
            pixels,
            max_bits,
            max_bytes,
            max_chars: max_bytes.saturating_sub(1),
        }
    }
}
