//! Command-line interface module.

mod args;
mod common;
pub mod slug;
pub mod vault;

pub use args::{Cli, Commands, SlugArgs, VaultArgs};

use anyhow::Result;

use crate::config::Config;
use crate::debug;

/// Dispatch a parsed command.
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    if cli.is_vault_command() {
        debug!("vault"; "root: {}", config.vault_root().display());
    }

    match &cli.command {
        Commands::Slug { args } => slug::run_slug(args, config),
        Commands::Simplify { slugs } => slug::run_simplify(slugs),
        Commands::Link { from, to } => slug::run_link(from, to, config),
        Commands::Ensure { path, .. } => vault::run_ensure(path, config),
        Commands::Clean { directory, .. } => vault::run_clean(directory, config),
    }
}
