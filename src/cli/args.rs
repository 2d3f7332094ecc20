//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Slug and link helpers for publishing a notes vault
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: notepath.toml)
    #[arg(short = 'C', long, global = true, default_value = "notepath.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the slug of each file path
    #[command(visible_alias = "s")]
    Slug {
        #[command(flatten)]
        args: SlugArgs,
    },

    /// Collapse slugs to their comparison form (`notes/index` -> `notes/`)
    Simplify {
        /// Slugs to simplify. Use `-` to read them from stdin.
        #[arg(value_name = "SLUG", required = true)]
        slugs: Vec<String>,
    },

    /// Print the relative link from one page slug to another
    #[command(visible_alias = "l")]
    Link {
        /// Slug of the page containing the link
        from: String,
        /// Slug of the linked page
        to: String,
    },

    /// Create the parent folder of a vault path if it is missing
    Ensure {
        #[command(flatten)]
        vault: VaultArgs,

        /// Vault path whose parent folder should exist
        path: String,
    },

    /// Delete every file directly inside a vault folder
    Clean {
        #[command(flatten)]
        vault: VaultArgs,

        /// Vault folder to empty (sub-folders are kept)
        directory: String,
    },
}

/// Slug command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SlugArgs {
    /// File paths to slugify. Use `-` to read paths from stdin (one per line).
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Drop every extension, not just `.md`/`.html`
    #[arg(short = 'x', long)]
    pub no_ext: bool,

    /// Output `{path, slug}` records as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long, requires = "json")]
    pub pretty: bool,
}

/// Shared arguments for commands that touch the local vault.
#[derive(clap::Args, Debug, Clone)]
pub struct VaultArgs {
    /// Vault root directory (overrides `[vault] root`)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,
}

impl Commands {
    /// `--root` override, for commands that have one.
    pub fn vault_root(&self) -> Option<&PathBuf> {
        match self {
            Self::Ensure { vault, .. } | Self::Clean { vault, .. } => vault.root.as_ref(),
            _ => None,
        }
    }
}

impl Cli {
    pub const fn is_vault_command(&self) -> bool {
        matches!(self.command, Commands::Ensure { .. } | Commands::Clean { .. })
    }
}
