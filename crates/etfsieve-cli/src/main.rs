mod cli;
mod commands;
mod error;
mod output;
mod store;

use clap::Parser;

use crate::cli::Cli;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let result = commands::run(&cli)?;
    output::render(&result, cli.format, cli.pretty)?;

    Ok(())
}
