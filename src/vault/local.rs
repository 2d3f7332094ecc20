//! Vault backed by a directory on disk.

use std::path::{Path, PathBuf};
use tokio::fs;

use super::{Listing, Result, VaultAdapter, VaultError, join_entry, vault_key};

/// [`VaultAdapter`] over `tokio::fs`, rooted at a directory.
///
/// Vault paths are resolved under the root; `..` may not leave it.
#[derive(Debug, Clone)]
pub struct LocalVault {
    root: PathBuf,
}

impl LocalVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a vault path to `(key, absolute path)`.
    fn resolve(&self, path: &str) -> Result<(String, PathBuf)> {
        let key = vault_key(path)?;
        let resolved = key
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |acc, segment| acc.join(segment));
        Ok((key, resolved))
    }
}

impl VaultAdapter for LocalVault {
    async fn exists(&self, path: &str) -> Result<bool> {
        let (_, resolved) = self.resolve(path)?;
        fs::try_exists(&resolved)
            .await
            .map_err(|err| VaultError::io("check", path, err))
    }

    async fn mkdir(&self, path: &str) -> Result<()> {
        let (_, resolved) = self.resolve(path)?;
        fs::create_dir(&resolved)
            .await
            .map_err(|err| VaultError::io("create directory", path, err))
    }

    async fn list(&self, path: &str) -> Result<Listing> {
        let (key, resolved) = self.resolve(path)?;
        let io_err = |err| VaultError::io("list", path, err);

        let mut listing = Listing::default();
        let mut entries = fs::read_dir(&resolved).await.map_err(io_err)?;
        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let name = entry.file_name();
            let entry_path = join_entry(&key, &name.to_string_lossy());
            if entry.file_type().await.map_err(io_err)?.is_dir() {
                listing.folders.push(entry_path);
            } else {
                listing.files.push(entry_path);
            }
        }

        listing.files.sort();
        listing.folders.sort();
        Ok(listing)
    }

    async fn remove(&self, path: &str) -> Result<()> {
        let (_, resolved) = self.resolve(path)?;
        fs::remove_file(&resolved)
            .await
            .map_err(|err| VaultError::io("remove", path, err))
    }
}
