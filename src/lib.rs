//! notepath - slugs, relative links and vault folder helpers for publishing
//! a notes vault as static html.
//!
//! - [`utils::path`]: pure slug and link functions
//! - [`vault`]: host filesystem capability and directory helpers
//! - [`config`]: `notepath.toml`
//! - [`cli`]: the `notepath` command line

pub mod cli;
pub mod config;
pub mod logger;
pub mod utils;
pub mod vault;

pub use config::Config;
pub use utils::path::{
    SlugRules, create_relative_path, simplify_slug, sluggify, slugify_file_path, strip_slashes,
};
pub use vault::{
    Listing, LocalVault, MemoryVault, VaultAdapter, VaultError, delete_files_in_directory,
    ensure_directory,
};
