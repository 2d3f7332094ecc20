//! `[link]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [link]
//! extension = ".html"   # "" for extensionless links
//! ```

use serde::{Deserialize, Serialize};

use crate::utils::path::link::DEFAULT_LINK_EXTENSION;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LinkSectionConfig {
    /// Suffix appended to generated page links.
    pub extension: String,
}

impl Default for LinkSectionConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_LINK_EXTENSION.to_owned(),
        }
    }
}

impl LinkSectionConfig {
    pub fn validate(&self, errors: &mut Vec<String>) {
        if !self.extension.is_empty() && !self.extension.starts_with('.') {
            errors.push(format!(
                "link.extension: `{}` must be empty or start with `.`",
                self.extension
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.link.extension, ".html");
    }

    #[test]
    fn test_validate() {
        for (ext, ok) in [(".html", true), ("", true), (".htm", true), ("html", false)] {
            let mut errors = Vec::new();
            LinkSectionConfig { extension: ext.into() }.validate(&mut errors);
            assert_eq!(errors.is_empty(), ok, "extension {ext:?}");
        }
    }
}
