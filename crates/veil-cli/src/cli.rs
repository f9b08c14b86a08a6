use std::process::ExitCode;

use clap::{Parser, Subcommand};
use veil_core::media::codec_options::DEFAULT_NESTED_IMAGE_MARGIN;
use veil_core::media::ImageFormat;
use veil_core::CodecOptions;

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Experimental: lossless format image carriers are written as, png or bmp
    #[arg(long = "x-image-format", default_value = "png", value_parser = parse_image_format)]
    pub image_format: ImageFormat,

    /// Experimental: linear margin applied when a secret image has to shrink to fit
    #[arg(long = "x-resize-margin", default_value_t = DEFAULT_NESTED_IMAGE_MARGIN)]
    pub resize_margin: f64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    UnveilImage(unveil_image::UnveilImageArgs),
    UnveilRaw(unveil_raw::UnveilRawArgs),
    Capacity(capacity::CapacityArgs),
    Analyze(analyze::AnalyzeArgs),
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions::default()
            .with_image_format(self.image_format)
            .with_nested_image_margin(self.resize_margin)
    }

    pub fn run(self) -> CliResult<ExitCode> {
        let options = self.codec_options();

        match self.command {
            Commands::Hide(args) => args.run(options).map(|()| ExitCode::SUCCESS),
            Commands::Unveil(args) => args.run(),
            Commands::UnveilImage(args) => args.run(options).map(|()| ExitCode::SUCCESS),
            Commands::UnveilRaw(args) => args.run().map(|()| ExitCode::SUCCESS),
            Commands::Capacity(args) => args.run().map(|()| ExitCode::SUCCESS),
            Commands::Analyze(args) => args.run(options).map(|()| ExitCode::SUCCESS),
        }
    }
}

fn parse_image_format(format: &str) -> Result<ImageFormat, String> {
    match format.to_lowercase().as_str() {
        "png" => Ok(ImageFormat::Png),
        "bmp" => Ok(ImageFormat::Bmp),
        other => Err(format!("{other} is not a lossless image format, use png or bmp")),
    }
}

/// Prompts on the terminal, an empty answer or a closed terminal means no password.
pub fn ask_for_password(confirm: bool) -> Option<String> {
    let mut prompt = dialoguer::Password::new()
        .with_prompt("Password (leave empty for none)")
        .allow_empty_password(true);
    if confirm {
        prompt = prompt.with_confirmation("Repeat password", "Error: the passwords don't match.");
    }

    prompt
        .interact()
        .ok()
        .filter(|password| !password.is_empty())
}
