mod assets;
mod cli;
mod converter;
mod error;
mod locator;
mod pandoc;

use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Usage errors exit with 1; --help and --version still exit 0.
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            err.print().ok();
            return ExitCode::from(1);
        }
        Err(err) => err.exit(),
    };

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &cli::Cli) -> Result<()> {
    let locator = locator::Locator::from_env(cli.pandoc.clone());
    let conversion = converter::convert(&cli.input, &locator)?;
    tracing::debug!(pandoc = %conversion.pandoc.display(), "conversion finished");
    println!("{}", conversion.summary());
    Ok(())
}
