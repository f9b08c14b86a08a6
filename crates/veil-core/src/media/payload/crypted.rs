use std::fmt::{self, Debug, Formatter};

use log::{debug, warn};
use veil_crypto::{decrypt, derive_key, encrypt, generate_salt, sealed_len, SALT_LEN};

use super::factory::{FabPlain, PayloadCodecFactory};
use super::frame::{Frame, MAGIC_LEN};
use super::termination::Termination;
use crate::error::VeilError;
use crate::result::Result;
use crate::Unveiled;

/// encrypted frames, a fresh salt for every message
#[derive(Clone, PartialEq, Eq)]
pub struct FabCrypted {
    password: String,
}

impl FabCrypted {
    pub fn new<I: Into<String>>(password: I) -> Self {
        FabCrypted {
            password: password.into(),
        }
    }
}

impl Debug for FabCrypted {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FabCrypted({})", "*".repeat(self.password.len()))
    }
}

impl PayloadCodecFactory for FabCrypted {
    fn create_frame(&self, content: &[u8]) -> Result<Frame> {
        let salt = generate_salt();
        let key = derive_key(&self.password, &salt);
        let ciphertext = encrypt(&key, content).map_err(VeilError::EncryptionError)?;
        debug!(
            "Encrypted {} bytes into a token of {} bytes",
            content.len(),
            ciphertext.len()
        );

        Ok(Frame::Encrypted { salt, ciphertext })
    }

    fn open_frame(&self, frame: Frame) -> Unveiled {
        match frame {
            Frame::Encrypted { salt, ciphertext } => {
                let key = derive_key(&self.password, &salt);
                match decrypt(&key, &ciphertext) {
                    Ok(message) => Unveiled::Message(message),
                    Err(e) => {
                        warn!("Decryption failed: {e}");
                        Unveiled::DecryptionFailed
                    }
                }
            }
            frame => FabPlain.open_frame(frame),
        }
    }

    fn frame_len(&self, content_len: usize, termination: Termination) -> usize {
        MAGIC_LEN + SALT_LEN + sealed_len(content_len) + termination.ciphertext_suffix().len()
    }
}
