//! Configuration management for `notepath.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/    # [slug], [link], [vault]
//! ├── error.rs    # ConfigError
//! ├── util.rs     # config file discovery
//! └── mod.rs      # Config (this file)
//! ```
//!
//! The file is optional: without one every section takes its default and
//! the working directory becomes the root.

mod error;
pub mod section;
mod util;

pub use error::ConfigError;
pub use section::{LinkSectionConfig, SlugSectionConfig, VaultSectionConfig};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{cli::Cli, debug, log, utils::path::SlugRules};
use util::find_config_file;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing notepath.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative paths are resolved against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Slug settings
    #[serde(default)]
    pub slug: SlugSectionConfig,

    /// Link settings
    #[serde(default)]
    pub link: LinkSectionConfig,

    /// Local vault settings
    #[serde(default)]
    pub vault: VaultSectionConfig,
}

impl Config {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file. The root is the config
    /// file's parent directory, or cwd when there is no config file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self {
                    root: cwd.clone(),
                    ..Self::default()
                }
            }
        };

        // --root is relative to where the command runs, not to the config file
        if let Some(root) = cli.command.vault_root() {
            config.vault.root = cwd.join(root);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate all sections, reporting every problem at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();
        self.slug.validate(&mut errors);
        self.link.validate(&mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }

    /// Slug and link rules derived from `[slug]` and `[link]`.
    pub fn rules(&self) -> SlugRules {
        SlugRules {
            drop_extensions: self.slug.drop_extensions.clone(),
            link_extension: self.link.extension.clone(),
        }
    }

    /// Directory backing the local vault.
    pub fn vault_root(&self) -> PathBuf {
        self.root.join(&self.vault.root)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> Config {
    let (parsed, ignored) = Config::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_invalid_toml() {
        let result = Config::parse("[slug\ndrop_extensions = []");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_default_rules_match_free_functions() {
        let config = test_parse_config("");
        assert_eq!(config.rules(), SlugRules::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rules_from_sections() {
        let config = test_parse_config(
            "[slug]\ndrop_extensions = [\".txt\"]\n[link]\nextension = \"\"",
        );
        let rules = config.rules();
        assert_eq!(rules.slugify_file_path("a/My Note.txt", false), "a/My-Note");
        assert_eq!(rules.slugify_file_path("a/b.md", false), "a/b.md");
        assert_eq!(rules.relative_link("a/b", "a/c"), "./c");
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config =
            test_parse_config("[slug]\ndrop_extensions = [\"md\"]\n[link]\nextension = \"html\"");
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("slug.drop_extensions"));
        assert!(err.contains("link.extension"));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[link]\nextension = \".htm\"\n[unknown_section]\nfield = 1";
        let (config, ignored) = Config::parse_with_ignored(content).unwrap();
        assert_eq!(config.link.extension, ".htm");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_vault_root_joins_config_root() {
        let mut config = test_parse_config("[vault]\nroot = \"publish\"");
        config.root = PathBuf::from("/home/user/notes");
        assert_eq!(config.vault_root(), Path::new("/home/user/notes/publish"));

        config.vault.root = PathBuf::from("/srv/site");
        assert_eq!(config.vault_root(), Path::new("/srv/site"));
    }
}
