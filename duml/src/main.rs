//! duml CLI - decode a hex packet and print it

use anyhow::Context;
use clap::Parser;

use duml::cli::Cli;
use duml::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level)?;

    let output = cli
        .command
        .render()
        .context("could not decode packet")?;
    println!("{output}");

    Ok(())
}
