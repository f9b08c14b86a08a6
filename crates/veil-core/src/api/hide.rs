use std::path::{Path, PathBuf};

use log::debug;

use crate::commands::{hide_image, hide_message};
use crate::media::{rgb_image_from_bytes, CodecOptions, Media, Persist};
use crate::VeilError;

use super::Password;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<Vec<u8>>,
    secret_image: Option<PathBuf>,
    carrier: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.as_bytes().to_vec());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().as_bytes().to_vec());
        self
    }

    /// an image file that gets hidden as a whole, instead of a message
    pub fn with_secret_image<A: AsRef<Path>>(mut self, secret_image: A) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    pub fn use_secret_image(mut self, secret_image: Option<PathBuf>) -> Self {
        self.secret_image = secret_image;
        self
    }

    /// the carrier, a PNG/BMP/JPEG image or a WAV file
    pub fn with_carrier<A: AsRef<Path>>(mut self, carrier: A) -> Self {
        self.carrier = Some(carrier.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password
    /// If `None` is passed, no password will be used, leads to no encryption used
    pub fn use_password<S: AsRef<str>>(mut self, password: Option<S>) -> Self {
        self.password = password.map(|s| s.as_ref().to_string()).into();
        self
    }

    pub fn execute(self) -> Result<(), VeilError> {
        self.validate()?;
        let Some(carrier) = self.carrier else {
            return Err(VeilError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(VeilError::TargetNotSet);
        };

        let mut media = Media::from_file(&carrier)?;
        if let Some(secret_image) = self.secret_image {
            let secret = rgb_image_from_bytes(&std::fs::read(secret_image)?)?;
            hide_image(&mut media, secret, &self.options)?;
        } else if let Some(message) = self.message {
            debug!("Hiding a message of {} bytes, encrypted: {}", message.len(), self.password.is_set());
            hide_message(&mut media, &message, self.password.as_deref())?;
        }

        media.save_as(&output, &self.options)
    }

    fn validate(&self) -> Result<(), VeilError> {
        match (&self.message, &self.secret_image) {
            (None, None) => Err(VeilError::MissingMessage),
            (Some(_), Some(_)) => Err(VeilError::ConflictingPayloads),
            _ => Ok(()),
        }
    }
}
