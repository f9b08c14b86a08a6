use std::path::PathBuf;

use clap::Args;
use veil_core::CodecOptions;

use crate::CliResult;

/// Hides a text message or an image in PNG/BMP images, or a text message in WAV audio files
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password used to encrypt the message, pass an empty one to be asked interactively
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Carrier file such as a PNG image or WAV audio file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final carrier will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output media file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "secret_image"
    )]
    pub message: Option<String>,

    /// An image that will be hidden as a whole, shrunk if it does not fit
    #[arg(
        short,
        long,
        value_name = "image file",
        conflicts_with_all = ["message", "password"]
    )]
    pub secret_image: Option<PathBuf>,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let password = match self.password {
            Some(password) if password.is_empty() => crate::cli::ask_for_password(true),
            password => password,
        };

        veil_core::api::hide::prepare()
            .with_options(options)
            .with_carrier(self.media)
            .with_output(self.write_to_file)
            .use_message(self.message)
            .use_secret_image(self.secret_image)
            .use_password(password)
            .execute()
    }
}
