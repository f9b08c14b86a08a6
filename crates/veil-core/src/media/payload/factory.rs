use enum_dispatch::enum_dispatch;
use log::warn;

use super::crypted::FabCrypted;
use super::frame::{Frame, FrameKind, PLAIN_DELIMITER};
use super::termination::Termination;
use crate::error::VeilError;
use crate::result::Result;
use crate::Unveiled;

#[enum_dispatch]
pub trait PayloadCodecFactory {
    /// wraps a message into the frame this factory stands for
    fn create_frame(&self, content: &[u8]) -> Result<Frame>;

    /// resolves a frame found on a carrier into what the caller gets to see
    fn open_frame(&self, frame: Frame) -> Unveiled;

    /// carrier bytes a message of `content_len` bytes occupies
    fn frame_len(&self, content_len: usize, termination: Termination) -> usize;
}

/// plain text frames, no password involved
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FabPlain;

impl PayloadCodecFactory for FabPlain {
    fn create_frame(&self, content: &[u8]) -> Result<Frame> {
        if FrameKind::sniff(content) != FrameKind::Plaintext {
            warn!("Refusing a plain text message that starts with a frame magic tag");
            return Err(VeilError::ReservedMagicPrefix);
        }

        Ok(Frame::Plaintext(content.to_vec()))
    }

    fn open_frame(&self, frame: Frame) -> Unveiled {
        match frame {
            Frame::Plaintext(message) => Unveiled::Message(message),
            Frame::NestedImage(img) => Unveiled::Image(img),
            Frame::Encrypted { .. } => {
                warn!("Found an encrypted message, but no password was given");
                Unveiled::PasswordRequired
            }
        }
    }

    fn frame_len(&self, content_len: usize, termination: Termination) -> usize {
        content_len + PLAIN_DELIMITER.len() + termination.plaintext_suffix().len()
    }
}

#[enum_dispatch(PayloadCodecFactory)]
#[derive(Debug)]
pub enum Fab {
    FabPlain,
    FabCrypted,
}

impl Fab {
    /// encrypting frames when a password is given, plain ones otherwise
    pub fn for_password(password: Option<&str>) -> Self {
        match password {
            Some(password) => FabCrypted::new(password).into(),
            None => FabPlain.into(),
        }
    }
}
