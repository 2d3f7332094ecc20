//! Host filesystem capability.
//!
//! The publishing pipeline never touches the disk directly: it is handed a
//! [`VaultAdapter`] and every helper here takes that adapter explicitly.
//!
//! ```text
//! vault/
//! ├── error.rs    # VaultError
//! ├── local.rs    # LocalVault (tokio::fs under a root directory)
//! ├── memory.rs   # MemoryVault (in-memory tree)
//! └── ops.rs      # ensure_directory, delete_files_in_directory
//! ```

mod error;
mod local;
mod memory;
mod ops;

pub use error::{Result, VaultError};
pub use local::LocalVault;
pub use memory::MemoryVault;
pub use ops::{delete_files_in_directory, ensure_directory};

/// Result of listing a vault folder.
///
/// Entries are vault paths (`/`-separated, prefixed with the listed folder),
/// not bare names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub files: Vec<String>,
    pub folders: Vec<String>,
}

/// Filesystem operations provided by the host.
///
/// Paths are vault-relative and `/`-separated. `mkdir` is not recursive:
/// a missing parent folder is an error.
pub trait VaultAdapter: Send + Sync {
    fn exists(&self, path: &str) -> impl Future<Output = Result<bool>> + Send;

    fn mkdir(&self, path: &str) -> impl Future<Output = Result<()>> + Send;

    fn list(&self, path: &str) -> impl Future<Output = Result<Listing>> + Send;

    fn remove(&self, path: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Join a folder key and an entry name into a vault path.
fn join_entry(folder: &str, name: &str) -> String {
    if folder.is_empty() {
        name.to_owned()
    } else {
        format!("{folder}/{name}")
    }
}

/// Normalize a vault path into a key: no empty or `.` segments, `..`
/// resolved. The vault root is the empty key.
fn vault_key(path: &str) -> Result<String> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(VaultError::InvalidPath(path.to_owned()));
                }
            }
            segment => segments.push(segment),
        }
    }
    Ok(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vault_key() {
        assert_eq!(vault_key("").unwrap(), "");
        assert_eq!(vault_key(".").unwrap(), "");
        assert_eq!(vault_key("/out/./notes/").unwrap(), "out/notes");
        assert_eq!(vault_key("out/../notes").unwrap(), "notes");
    }

    #[test]
    fn test_vault_key_rejects_escape() {
        assert!(matches!(vault_key("../x"), Err(VaultError::InvalidPath(_))));
        assert!(matches!(vault_key("a/../../x"), Err(VaultError::InvalidPath(_))));
    }

    #[test]
    fn test_join_entry() {
        assert_eq!(join_entry("", "a.html"), "a.html");
        assert_eq!(join_entry("out", "a.html"), "out/a.html");
    }
}
