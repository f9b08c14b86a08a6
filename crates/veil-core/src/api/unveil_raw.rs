use std::path::{Path, PathBuf};

use crate::media::Media;
use crate::VeilError;

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
}

impl UnveilRawApi {
    /// This is the secret image or audio that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// This is the raw file where all data will be saved to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<(), VeilError> {
        let Some(secret_media) = self.secret_media else {
            return Err(VeilError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(VeilError::TargetNotSet);
        };

        let raw = Media::from_file(&secret_media)?.unveil_bytes();
        std::fs::write(destination_file, raw)?;

        Ok(())
    }
}
