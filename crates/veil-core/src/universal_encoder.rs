use std::io::{Result, Write};

use crate::bit_iterator::bytes_to_bits;
use crate::media::{HideBit, MediaPrimitiveMut};

/// Overwrites the LSB of each channel with the next bit, in channel order.
/// Stops as soon as either side runs out; channels past the last bit stay untouched.
///
/// Returns the number of bits embedded.
pub fn embed<'a, C, B>(channels: C, bits: B) -> usize
where
    C: IntoIterator<Item = MediaPrimitiveMut<'a>>,
    B: IntoIterator<Item = bool>,
{
    channels
        .into_iter()
        .zip(bits)
        .map(|(channel, bit)| channel.hide_bit(bit))
        .count()
}

/// generic LSB encoder, writes bytes MSB-first into a sequence of mutable channels
pub struct Encoder<'a, I>
where
    I: Iterator<Item = MediaPrimitiveMut<'a>>,
{
    carrier: I,
}

impl<'a, I> Encoder<'a, I>
where
    I: Iterator<Item = MediaPrimitiveMut<'a>>,
{
    pub fn new(carrier: I) -> Self {
        Self { carrier }
    }
}

impl<'a, I> Write for Encoder<'a, I>
where
    I: Iterator<Item = MediaPrimitiveMut<'a>>,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        // 1 bit per channel
        let items_to_take = buf.len() << 3;
        let bits_written = embed(self.carrier.by_ref().take(items_to_take), bytes_to_bits(buf));

        Ok(bits_written >> 3)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
