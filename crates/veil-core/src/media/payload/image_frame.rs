use byteorder::{BigEndian, ByteOrder};
use image::RgbImage;
use log::{debug, error};

use super::frame::{IMAGE_MAGIC, MAGIC_LEN};
use crate::error::VeilError;
use crate::result::Result;

/// magic(4) + width BE(4) + height BE(4)
pub const NESTED_HEADER_LEN: usize = MAGIC_LEN + 4 + 4;

pub fn encode_header(width: u32, height: u32) -> [u8; NESTED_HEADER_LEN] {
    let mut header = [0; NESTED_HEADER_LEN];
    header[..MAGIC_LEN].copy_from_slice(&IMAGE_MAGIC);
    BigEndian::write_u32(&mut header[MAGIC_LEN..MAGIC_LEN + 4], width);
    BigEndian::write_u32(&mut header[MAGIC_LEN + 4..], height);

    header
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    ReadingHeader,
    ReadingBody {
        width: u32,
        height: u32,
        expected: usize,
    },
    Done {
        width: u32,
        height: u32,
    },
}

/// Byte by byte reader of a nested image frame.
///
/// Collects the 12 header bytes, then exactly `width * height * 3` body bytes, and stops.
/// Bytes fed after that are ignored, so a caller can stop pulling bits off the carrier early.
#[derive(Debug)]
pub struct NestedImageScan {
    state: ScanState,
    header: [u8; NESTED_HEADER_LEN],
    body: Vec<u8>,
    consumed: usize,
    available: usize,
}

impl NestedImageScan {
    /// `available` is the most bytes the source can ever deliver, header included
    pub fn new(available: usize) -> Self {
        Self {
            state: ScanState::ReadingHeader,
            header: [0; NESTED_HEADER_LEN],
            body: Vec::new(),
            consumed: 0,
            available,
        }
    }

    /// Runs a whole byte source through the scanner.
    pub fn scan<I: IntoIterator<Item = u8>>(bytes: I, available: usize) -> Result<RgbImage> {
        let mut scan = Self::new(available);
        for byte in bytes {
            if scan.feed(byte)? {
                break;
            }
        }

        scan.finish()
    }

    /// bytes taken so far, header included
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, ScanState::Done { .. })
    }

    /// Takes the next byte, returns `true` once the body is complete.
    pub fn feed(&mut self, byte: u8) -> Result<bool> {
        match self.state {
            ScanState::ReadingHeader => {
                self.header[self.consumed] = byte;
                self.consumed += 1;
                if self.consumed == NESTED_HEADER_LEN {
                    self.state = self.read_header()?;
                }
            }
            ScanState::ReadingBody {
                width,
                height,
                expected,
            } => {
                self.body.push(byte);
                self.consumed += 1;
                if self.body.len() == expected {
                    self.state = ScanState::Done { width, height };
                }
            }
            ScanState::Done { .. } => {}
        }

        Ok(self.is_done())
    }

    fn read_header(&mut self) -> Result<ScanState> {
        if self.header[..MAGIC_LEN] != IMAGE_MAGIC {
            error!("Nested image header does not start with the image magic tag");
            return Err(VeilError::MalformedNestedImage);
        }
        let width = BigEndian::read_u32(&self.header[MAGIC_LEN..MAGIC_LEN + 4]);
        let height = BigEndian::read_u32(&self.header[MAGIC_LEN + 4..]);

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(3))
            .filter(|expected| *expected > 0)
            .ok_or_else(|| {
                error!("Nested image header declares impossible dimensions {width}x{height}");
                VeilError::MalformedNestedImage
            })?;

        let remaining = self.available.saturating_sub(NESTED_HEADER_LEN);
        if expected > remaining {
            error!("Nested image of {width}x{height} needs {expected} bytes, only {remaining} remain");
            return Err(VeilError::IncompleteNestedImage {
                expected,
                received: remaining,
            });
        }
        debug!("Nested image header: {width}x{height}, reading {expected} bytes");

        self.body.reserve_exact(expected);
        Ok(ScanState::ReadingBody {
            width,
            height,
            expected,
        })
    }

    /// Hands out the image, or the reason there is none.
    pub fn finish(self) -> Result<RgbImage> {
        match self.state {
            ScanState::Done { width, height } => {
                RgbImage::from_raw(width, height, self.body).ok_or(VeilError::MalformedNestedImage)
            }
            ScanState::ReadingBody { expected, .. } => {
                error!(
                    "Nested image body ended after {} of {expected} bytes",
                    self.body.len()
                );
                Err(VeilError::IncompleteNestedImage {
                    expected,
                    received: self.body.len(),
                })
            }
            ScanState::ReadingHeader => {
                error!("Nested image header ended after {} bytes", self.consumed);
                Err(VeilError::MalformedNestedImage)
            }
        }
    }
}
