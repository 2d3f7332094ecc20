//! `[vault]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [vault]
//! root = "."   # relative to the directory holding notepath.toml
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VaultSectionConfig {
    /// Directory backing the local vault.
    pub root: PathBuf,
}

impl Default for VaultSectionConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use std::path::Path;

    #[test]
    fn test_vault_root() {
        let config = test_parse_config("[vault]\nroot = \"publish\"");
        assert_eq!(config.vault.root, Path::new("publish"));

        let config = test_parse_config("");
        assert_eq!(config.vault.root, Path::new("."));
    }
}
