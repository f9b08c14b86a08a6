use std::path::{Path, PathBuf};

use crate::commands::unveil_message;
use crate::media::Media;
use crate::{Unveiled, VeilError};

use super::Password;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    password: Password,
}

impl UnveilApi {
    /// This is the secret image or audio that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// Set the password used for decrypting the message
    /// If `None` is passed, an encrypted message is reported as [`Unveiled::PasswordRequired`]
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<Unveiled, VeilError> {
        let Some(secret_media) = self.secret_media else {
            return Err(VeilError::CarrierNotSet);
        };

        unveil_message(&Media::from_file(&secret_media)?, self.password.as_deref())
    }
}
