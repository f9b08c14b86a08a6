use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use log::info;
use veil_core::{Unveiled, VeilError};

use crate::CliResult;

/// Unveils a text message from PNG/BMP images and WAV audio files
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password used to decrypt the message, asked for when the message turns out to be encrypted
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Source media that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// The message will be stored in that file instead of being printed
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<ExitCode> {
        let mut unveiled = self.unveil(self.password.clone())?;
        if unveiled == Unveiled::PasswordRequired && self.password.is_none() {
            info!("The message is encrypted, asking for a password");
            if let Some(password) = crate::cli::ask_for_password(false) {
                unveiled = self.unveil(Some(password))?;
            }
        }

        match unveiled {
            Unveiled::Message(ref message) => {
                match &self.output_file {
                    Some(file) => std::fs::write(file, message)?,
                    None => print_text(&unveiled)?,
                }
                Ok(ExitCode::SUCCESS)
            }
            Unveiled::Image(img) => {
                eprintln!(
                    "The carrier holds a hidden image of {}x{} pixels, use unveil-image to recover it",
                    img.width(),
                    img.height()
                );
                Ok(ExitCode::FAILURE)
            }
            Unveiled::PasswordRequired => {
                eprintln!("The message is encrypted, a password is required");
                Ok(ExitCode::FAILURE)
            }
            Unveiled::DecryptionFailed => {
                eprintln!("Decryption failed: wrong password or corrupted data");
                Ok(ExitCode::FAILURE)
            }
            Unveiled::NotFound => {
                eprintln!("Hidden message not found or corrupted");
                Ok(ExitCode::FAILURE)
            }
        }
    }

    fn unveil(&self, password: Option<String>) -> CliResult<Unveiled> {
        veil_core::api::unveil::prepare()
            .from_secret_file(&self.media)
            .using_password(password)
            .execute()
    }
}

/// prints a message as text, invalid UTF-8 sequences show up as replacement characters
fn print_text(unveiled: &Unveiled) -> Result<(), VeilError> {
    if let Some(text) = unveiled.text() {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}")?;
    }

    Ok(())
}
