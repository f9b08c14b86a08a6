use image::RgbImage;
use log::debug;
use veil_crypto::SALT_LEN;

use super::image_frame::{encode_header, NestedImageScan, NESTED_HEADER_LEN};
use super::termination::{find, Termination};
use crate::result::Result;

pub const MAGIC_LEN: usize = 4;
pub const ENCRYPTED_MAGIC: [u8; MAGIC_LEN] = *b"ENC:";
pub const IMAGE_MAGIC: [u8; MAGIC_LEN] = *b"IMG:";
/// closes every plain text message, a message containing it is cut short on decode
pub const PLAIN_DELIMITER: &[u8] = b"###";

/// What the leading magic field of an extracted byte stream announces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Plaintext,
    Encrypted,
    NestedImage,
}

impl FrameKind {
    pub fn sniff(raw: &[u8]) -> Self {
        match raw.get(..MAGIC_LEN) {
            Some(magic) if magic == ENCRYPTED_MAGIC => FrameKind::Encrypted,
            Some(magic) if magic == IMAGE_MAGIC => FrameKind::NestedImage,
            _ => FrameKind::Plaintext,
        }
    }
}

/// A payload in its self-describing carrier layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// message, then `###`
    Plaintext(Vec<u8>),
    /// `ENC:`, salt, then the token up to the carrier's terminator
    Encrypted {
        salt: [u8; SALT_LEN],
        ciphertext: Vec<u8>,
    },
    /// `IMG:`, width and height as u32 BE, then the raw RGB bytes
    NestedImage(RgbImage),
}

impl Frame {
    pub fn kind(&self) -> FrameKind {
        match self {
            Frame::Plaintext(_) => FrameKind::Plaintext,
            Frame::Encrypted { .. } => FrameKind::Encrypted,
            Frame::NestedImage(_) => FrameKind::NestedImage,
        }
    }

    /// number of bytes [`Frame::to_bytes`] produces
    pub fn encoded_len(&self, termination: Termination) -> usize {
        match self {
            Frame::Plaintext(message) => {
                message.len() + PLAIN_DELIMITER.len() + termination.plaintext_suffix().len()
            }
            Frame::Encrypted { ciphertext, .. } => {
                MAGIC_LEN + SALT_LEN + ciphertext.len() + termination.ciphertext_suffix().len()
            }
            Frame::NestedImage(img) => NESTED_HEADER_LEN + img.as_raw().len(),
        }
    }

    /// the bytes that go onto the carrier, terminator included
    pub fn to_bytes(&self, termination: Termination) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len(termination));
        match self {
            Frame::Plaintext(message) => {
                out.extend_from_slice(message);
                out.extend_from_slice(PLAIN_DELIMITER);
                out.extend_from_slice(termination.plaintext_suffix());
            }
            Frame::Encrypted { salt, ciphertext } => {
                out.extend_from_slice(&ENCRYPTED_MAGIC);
                out.extend_from_slice(salt);
                out.extend_from_slice(ciphertext);
                out.extend_from_slice(termination.ciphertext_suffix());
            }
            Frame::NestedImage(img) => {
                out.extend_from_slice(&encode_header(img.width(), img.height()));
                out.extend_from_slice(img.as_raw());
            }
        }

        out
    }

    /// Reads a frame back from everything extracted off a carrier.
    ///
    /// `Ok(None)` means there is no recognizable frame. A nested image with a broken
    /// header or a short body is an error.
    pub fn parse(raw: &[u8], termination: Termination) -> Result<Option<Self>> {
        match FrameKind::sniff(raw) {
            FrameKind::Encrypted => Ok(Self::parse_encrypted(&raw[MAGIC_LEN..], termination)),
            FrameKind::NestedImage => {
                let img = NestedImageScan::scan(raw.iter().copied(), raw.len())?;
                Ok(Some(Frame::NestedImage(img)))
            }
            FrameKind::Plaintext => Ok(Self::parse_plaintext(raw, termination)),
        }
    }

    fn parse_encrypted(body: &[u8], termination: Termination) -> Option<Self> {
        let Some((salt, rest)) = body.split_first_chunk::<SALT_LEN>() else {
            debug!("Encrypted frame ends inside its salt");
            return None;
        };
        let ciphertext = termination.ciphertext_region(rest).to_vec();

        Some(Frame::Encrypted {
            salt: *salt,
            ciphertext,
        })
    }

    fn parse_plaintext(raw: &[u8], termination: Termination) -> Option<Self> {
        let region = termination.plaintext_region(raw);
        let Some(end) = find(region, PLAIN_DELIMITER) else {
            debug!("No message delimiter within {} bytes", region.len());
            return None;
        };

        Some(Frame::Plaintext(region[..end].to_vec()))
    }
}
