mod args;
mod config;
mod input;
mod logging;

use args::Cli;
use clap::Parser;
use dedupe::{DedupeError, UNKNOWN_MODE_MESSAGE};
use std::io::{self, Write};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let config = config::load_config(cli.config.as_deref())?;
    let input = input::read_input(cli.input.as_deref(), io::stdin().lock())?;

    let output = match config::resolve_options(&cli, &config) {
        Ok(options) => {
            tracing::debug!(?options, "resolved options");
            dedupe::process(&input, &options)?
        }
        // Unknown type is reported as output, not as a failure
        Err(DedupeError::UnknownMode(mode)) => {
            tracing::warn!("unknown type '{}'", mode);
            dedupe::serialize(&[UNKNOWN_MODE_MESSAGE], "\n")
        }
        Err(e) => return Err(e.into()),
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
