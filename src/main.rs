//! notepath - slug and link helpers for a notes vault.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use notepath::cli::{self, Cli};
use notepath::{Config, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = Config::load(&cli)?;
    cli::run(&cli, &config)
}
