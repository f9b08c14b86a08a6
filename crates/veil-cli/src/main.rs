mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use log::error;

use crate::cli::CliArgs;

pub type CliResult<T> = veil_core::Result<T>;

fn main() -> ExitCode {
    env_logger::init();

    match CliArgs::parse().run() {
        Ok(code) => code,
        Err(e) => {
            error!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
