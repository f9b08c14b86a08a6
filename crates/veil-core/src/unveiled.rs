use std::borrow::Cow;

use image::RgbImage;

/// Everything a decode can end with that is not a hard error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unveiled {
    Message(Vec<u8>),
    Image(RgbImage),
    /// the carrier holds an encrypted frame but no password was given
    PasswordRequired,
    /// wrong password or tampered ciphertext, the two are not told apart
    DecryptionFailed,
    /// hidden message not found or corrupted
    NotFound,
}

impl Unveiled {
    /// the message as text, invalid UTF-8 sequences replaced
    pub fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            Unveiled::Message(m) => Some(String::from_utf8_lossy(m)),
            _ => None,
        }
    }
}
