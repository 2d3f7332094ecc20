//! `ensure` and `clean` commands against the local vault.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::log;
use crate::vault::{self, LocalVault};

fn open_vault(config: &Config) -> LocalVault {
    LocalVault::new(config.vault_root())
}

/// Build the runtime the vault helpers run on.
fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")
}

/// Execute ensure command
pub fn run_ensure(path: &str, config: &Config) -> Result<()> {
    let local = open_vault(config);
    runtime()?.block_on(vault::ensure_directory(&local, path))?;
    log!("vault"; "ready: {}", path);
    Ok(())
}

/// Execute clean command
pub fn run_clean(directory: &str, config: &Config) -> Result<()> {
    let local = open_vault(config);
    let deleted = runtime()?.block_on(vault::delete_files_in_directory(&local, directory))?;
    log!("vault"; "deleted {} file(s) in {}", deleted, directory);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_at(root: &std::path::Path) -> Config {
        Config {
            root: root.to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn test_run_ensure_and_clean() {
        let dir = TempDir::new().unwrap();
        let config = config_at(dir.path());

        run_ensure("out/index.html", &config).unwrap();
        assert!(dir.path().join("out").is_dir());

        fs::write(dir.path().join("out/index.html"), "").unwrap();
        run_clean("out", &config).unwrap();
        assert!(!dir.path().join("out/index.html").exists());
        assert!(dir.path().join("out").is_dir());
    }

    #[test]
    fn test_run_clean_missing_folder_fails() {
        let dir = TempDir::new().unwrap();
        let err = run_clean("nope", &config_at(dir.path())).unwrap_err();
        assert!(format!("{err}").contains("nope"));
    }
}
