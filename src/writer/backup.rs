use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use crate::datafile::{self, BACKUP_SUFFIX};

use super::WriteError;

/// Directories under the data root that the writer may touch.
const BACKUP_ROOTS: [&str; 2] = ["local", "hd"];

/// Overwrite `path` with `value`, first saving the original as a backup unless
/// one already exists from an earlier run.
pub(crate) fn write_with_backup(path: &Path, value: &Value) -> Result<(), WriteError> {
    let backup = datafile::backup_path(path);
    if !backup.exists() {
        fs::copy(path, &backup).map_err(|source| WriteError::io(path, source))?;
    }
    datafile::write_json(path, value).map_err(|source| WriteError::io(path, source))?;
    info!("wrote new rules to {}", path.display());
    Ok(())
}

/// Restore every backed-up file under `data_dir`, undoing all earlier runs.
///
/// Returns the paths of the restored originals.
///
/// # Errors
///
/// Returns [`WriteError`] if the backups cannot be listed or moved back.
pub fn remove_all_rules(data_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, WriteError> {
    let data_dir = data_dir.as_ref();
    let escaped_root = glob::Pattern::escape(&data_dir.to_string_lossy());
    let mut restored = Vec::new();

    for root in BACKUP_ROOTS {
        let pattern = format!("{escaped_root}/{root}/**/*.{BACKUP_SUFFIX}");
        for entry in glob::glob(&pattern)? {
            let backup = entry?;
            let original = backup.with_extension("");
            fs::rename(&backup, &original).map_err(|source| WriteError::io(&backup, source))?;
            info!("removed filter rules in {}", original.display());
            restored.push(original);
        }
    }
    Ok(restored)
}
