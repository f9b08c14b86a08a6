/// wrap the low level data types that carries information
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum MediaPrimitive {
    ImageColorChannel(u8),
    AudioFrameByte(u8),
}

/// mutable primitive for storing hidden data
#[derive(Debug, Eq, PartialEq)]
pub enum MediaPrimitiveMut<'a> {
    ImageColorChannel(&'a mut u8),
    AudioFrameByte(&'a mut u8),
}

pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

pub trait UnveilBit {
    fn unveil_bit(&self) -> bool;
}

impl HideBit for MediaPrimitiveMut<'_> {
    #[inline(always)]
    fn hide_bit(self, bit: bool) {
        match self {
            MediaPrimitiveMut::ImageColorChannel(c) | MediaPrimitiveMut::AudioFrameByte(c) => {
                *c = (*c & (u8::MAX - 1)) | u8::from(bit);
            }
        }
    }
}

impl UnveilBit for MediaPrimitive {
    #[inline(always)]
    fn unveil_bit(&self) -> bool {
        match self {
            MediaPrimitive::ImageColorChannel(c) | MediaPrimitive::AudioFrameByte(c) => c & 1 == 1,
        }
    }
}
