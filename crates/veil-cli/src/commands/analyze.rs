use std::path::PathBuf;

use clap::Args;
use veil_core::CodecOptions;

use crate::CliResult;

/// Renders the least significant bit plane of an image, hidden data shows up as noise
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Image to inspect
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,

    /// The bit plane will be stored as image file
    #[arg(short = 'o', long = "out", value_name = "output image file", required = true)]
    pub output_file: PathBuf,
}

impl AnalyzeArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let plane = veil_core::commands::analyze(&std::fs::read(&self.media)?, &options)?;
        std::fs::write(&self.output_file, plane)?;

        Ok(())
    }
}
