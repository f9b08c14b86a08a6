use std::io::Read;

use bitstream_io::{BigEndian, BitRead, BitReader};

/// Iterates the bits of a byte source, most significant bit first.
pub struct BitIterator<R: Read> {
    reader: BitReader<R, BigEndian>,
}

impl<R: Read> BitIterator<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: BitReader::endian(source, BigEndian),
        }
    }
}

impl<R: Read> Iterator for BitIterator<R> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_bit().ok()
    }
}

/// MSB-first bit sequence of `bytes`, 8 bits per byte
pub fn bytes_to_bits(bytes: &[u8]) -> BitIterator<&[u8]> {
    BitIterator::new(bytes)
}
