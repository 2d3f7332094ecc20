//! `[slug]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [slug]
//! drop_extensions = [".md", ".html"]   # removed from page slugs
//! ```

use serde::{Deserialize, Serialize};

use crate::utils::path::slug::DEFAULT_DROP_EXTENSIONS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SlugSectionConfig {
    /// Extensions stripped from file slugs. Exact, case-sensitive match.
    pub drop_extensions: Vec<String>,
}

impl Default for SlugSectionConfig {
    fn default() -> Self {
        Self {
            drop_extensions: DEFAULT_DROP_EXTENSIONS.map(String::from).to_vec(),
        }
    }
}

impl SlugSectionConfig {
    /// Every entry must look like an extension the slug pattern can match.
    pub fn validate(&self, errors: &mut Vec<String>) {
        for ext in &self.drop_extensions {
            let valid = ext.strip_prefix('.').is_some_and(|rest| {
                !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric())
            });
            if !valid {
                errors.push(format!(
                    "slug.drop_extensions: `{ext}` is not `.` followed by letters or digits"
                ));
            }
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
        assert_eq!(config.slug.drop_extensions, vec![".md", ".html"]);
    }

    #[test]
    fn test_custom_list() {
        let config = test_parse_config("[slug]\ndrop_extensions = [\".md\", \".txt\"]");
        assert_eq!(config.slug.drop_extensions, vec![".md", ".txt"]);
    }

    #[test]
    fn test_validate() {
        let mut errors = Vec::new();
        SlugSectionConfig::default().validate(&mut errors);
        assert!(errors.is_empty());

        let config = SlugSectionConfig {
            drop_extensions: vec!["md".into(), ".".into(), ".tar.gz".into(), ".MD".into()],
        };
        config.validate(&mut errors);
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("`md`"));
    }
}
