//! In-memory vault.

use parking_lot::Mutex;
use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;

use super::{Listing, Result, VaultAdapter, VaultError, vault_key};

/// [`VaultAdapter`] holding folders and files in memory.
///
/// The root folder always exists. Follows the same contract as a disk:
/// `mkdir` needs an existing parent, `remove` only deletes files.
#[derive(Debug, Default)]
pub struct MemoryVault {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    folders: BTreeSet<String>,
    files: BTreeMap<String, Vec<u8>>,
}

/// Parent key of a vault key (`""` for top-level entries).
fn parent_key(key: &str) -> &str {
    key.rsplit_once('/').map_or("", |(parent, _)| parent)
}

impl MemoryState {
    fn is_folder(&self, key: &str) -> bool {
        key.is_empty() || self.folders.contains(key)
    }

    fn contains(&self, key: &str) -> bool {
        self.is_folder(key) || self.files.contains_key(key)
    }

    /// Insert a folder and all its ancestors.
    fn insert_folder_all(&mut self, key: &str) {
        let mut current = key;
        while !current.is_empty() {
            self.folders.insert(current.to_owned());
            current = parent_key(current);
        }
    }
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a folder (and missing ancestors).
    ///
    /// # Panics
    /// Panics if `path` leaves the vault root.
    pub fn with_folder(self, path: &str) -> Self {
        let key = vault_key(path).expect("folder path inside the vault");
        self.state.lock().insert_folder_all(&key);
        self
    }

    /// Add a file (and missing ancestor folders).
    ///
    /// # Panics
    /// Panics if `path` leaves the vault root.
    pub fn with_file(self, path: &str, contents: impl Into<Vec<u8>>) -> Self {
        let key = vault_key(path).expect("file path inside the vault");
        {
            let mut state = self.state.lock();
            state.insert_folder_all(parent_key(&key));
            state.files.insert(key, contents.into());
        }
        self
    }

    /// All file paths, sorted.
    pub fn files(&self) -> Vec<String> {
        self.state.lock().files.keys().cloned().collect()
    }

    /// All folder paths, sorted. The root is not included.
    pub fn folders(&self) -> Vec<String> {
        self.state.lock().folders.iter().cloned().collect()
    }

    /// Contents of a file, if present.
    pub fn read(&self, path: &str) -> Option<Vec<u8>> {
        let key = vault_key(path).ok()?;
        self.state.lock().files.get(&key).cloned()
    }
}

impl VaultAdapter for MemoryVault {
    async fn exists(&self, path: &str) -> Result<bool> {
        let key = vault_key(path)?;
        Ok(self.state.lock().contains(&key))
    }

    async fn mkdir(&self, path: &str) -> Result<()> {
        const OP: &str = "create directory";
        let key = vault_key(path)?;
        let mut state = self.state.lock();

        if state.contains(&key) {
            return Err(VaultError::kind_error(OP, path, ErrorKind::AlreadyExists));
        }
        if !state.is_folder(parent_key(&key)) {
            return Err(VaultError::kind_error(OP, path, ErrorKind::NotFound));
        }
        state.folders.insert(key);
        Ok(())
    }

    async fn list(&self, path: &str) -> Result<Listing> {
        let key = vault_key(path)?;
        let state = self.state.lock();

        if !state.is_folder(&key) {
            return Err(VaultError::kind_error("list", path, ErrorKind::NotFound));
        }

        let children = |entry: &&String| parent_key(entry) == key;
        Ok(Listing {
            files: state.files.keys().filter(children).cloned().collect(),
            folders: state.folders.iter().filter(children).cloned().collect(),
        })
    }

    async fn remove(&self, path: &str) -> Result<()> {
        let key = vault_key(path)?;
        match self.state.lock().files.remove(&key) {
            Some(_) => Ok(()),
            None => Err(VaultError::kind_error("remove", path, ErrorKind::NotFound)),
        }
    }
}
