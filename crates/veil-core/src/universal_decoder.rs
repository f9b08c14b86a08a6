use std::io::{Read, Result};

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::media::{MediaPrimitive, UnveilBit};

/// Collects the LSB of every channel, regardless of how much payload there is.
pub fn extract<C>(channels: C) -> Vec<bool>
where
    C: IntoIterator<Item = MediaPrimitive>,
{
    channels.into_iter().map(|c| c.unveil_bit()).collect()
}

/// Packs bits MSB-first into bytes, a trailing partial byte is dropped.
pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|byte| byte.iter().fold(0u8, |acc, bit| (acc << 1) | u8::from(*bit)))
        .collect()
}

/// generic LSB decoder, reads bytes MSB-first from a sequence of channels
pub struct Decoder<I>
where
    I: Iterator<Item = MediaPrimitive>,
{
    carrier: I,
}

impl<I> Decoder<I>
where
    I: Iterator<Item = MediaPrimitive>,
{
    pub fn new(carrier: I) -> Self {
        Self { carrier }
    }
}

impl<I> Read for Decoder<I>
where
    I: Iterator<Item = MediaPrimitive>,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        // 1 bit per channel
        let items_to_take = buf.len() << 3;
        let mut bit_buffer = BitWriter::endian(&mut buf[..], BigEndian);

        let mut bits_read = 0;
        for channel in self.carrier.by_ref().take(items_to_take) {
            bit_buffer.write_bit(channel.unveil_bit())?;
            bits_read += 1;
        }

        // a trailing partial byte never makes it into `buf`
        Ok(bits_read >> 3)
    }
}
