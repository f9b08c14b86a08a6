use std::path::{Path, PathBuf};

use crate::commands::unveil_image;
use crate::media::{CodecOptions, Media, Persist};
use crate::VeilError;

pub fn prepare() -> UnveilImageApi {
    UnveilImageApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilImageApi {
    secret_media: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilImageApi {
    /// Use the given codec options, the image format applies to the recovered image
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the cover image that holds the hidden image
    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// This is where the recovered image will be saved to
    pub fn into_output_file(mut self, output: impl AsRef<Path>) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<(), VeilError> {
        let Some(secret_media) = self.secret_media else {
            return Err(VeilError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(VeilError::TargetNotSet);
        };

        let image = unveil_image(&Media::from_file(&secret_media)?)?;

        Media::from_image(image).save_as(&output, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use image::Rgb;
    use tempfile::tempdir;

    use crate::test_utils::{prepare_gradient_image, write_image};

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let cover = write_image(temp_dir.path(), "cover.png", &prepare_gradient_image(80, 80));
        let hidden = image::RgbImage::from_fn(20, 10, |x, y| Rgb([x as u8, y as u8, 42]));
        let hidden_file = write_image(temp_dir.path(), "hidden.png", &hidden);
        let secret = temp_dir.path().join("secret.png");

        crate::api::hide::prepare()
            .with_secret_image(hidden_file)
            .with_carrier(cover)
            .with_output(&secret)
            .execute()
            .expect("Failed to hide image in image");

        let recovered = temp_dir.path().join("recovered.png");
        super::prepare()
            .from_secret_file(&secret)
            .into_output_file(&recovered)
            .execute()
            .expect("Failed to unveil image from image");

        let recovered = image::open(recovered)
            .expect("Cannot open recovered image")
            .to_rgb8();
        assert_eq!(recovered, hidden);
    }
}
