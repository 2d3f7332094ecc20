//! Directory helpers built on a [`VaultAdapter`].

use super::{Result, VaultAdapter, VaultError};
use crate::utils::path::posix;
use crate::{debug, log};

/// Make sure the folder that will hold `target_path` exists.
///
/// Backslashes are treated as separators. Only the immediate parent is
/// created: a missing grandparent makes the host `mkdir` fail, and that error
/// is returned as-is.
pub async fn ensure_directory<V: VaultAdapter>(vault: &V, target_path: &str) -> Result<()> {
    let normalized = target_path.replace('\\', "/");
    let dir = posix::dirname(&normalized);

    if !vault.exists(dir).await? {
        debug!("vault"; "creating {}", dir);
        vault.mkdir(dir).await?;
    }
    Ok(())
}

/// Remove every file directly inside `directory`, one at a time.
///
/// Sub-folders are left alone. Not atomic: on failure the error is logged
/// and returned, and files removed before it stay removed.
///
/// Returns the number of deleted files.
pub async fn delete_files_in_directory<V: VaultAdapter>(
    vault: &V,
    directory: &str,
) -> Result<usize> {
    let result = async {
        let listing = vault.list(directory).await?;
        let mut deleted = 0;
        for file in &listing.files {
            vault.remove(file).await?;
            log!("vault"; "deleted: {}", file);
            deleted += 1;
        }
        Ok::<_, VaultError>(deleted)
    }
    .await;

    if let Err(err) = &result {
        log!("error"; "deleting files in {}: {} ({})", directory, err, err.kind());
    }
    result
}
