use std::path::PathBuf;

use clap::Args;
use veil_core::CodecOptions;

use crate::CliResult;

/// Unveils an image hidden in a PNG/BMP image
#[derive(Args, Debug)]
pub struct UnveilImageArgs {
    /// Source image that contains the hidden image
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,

    /// The recovered image will be stored as file
    #[arg(short = 'o', long = "out", value_name = "output image file", required = true)]
    pub output_file: PathBuf,
}

impl UnveilImageArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        veil_core::api::unveil_image::prepare()
            .with_options(options)
            .from_secret_file(self.media)
            .into_output_file(self.output_file)
            .execute()
    }
}
