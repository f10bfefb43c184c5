//! ghdiscuss CLI — GitHub discussion analysis report generator.
//!
//! Writes the built-in analysis of the tracked discussion topics as a
//! Markdown report and a JSON data file.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
