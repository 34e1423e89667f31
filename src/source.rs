use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use log::{trace, warn};

use crate::error::ExtractError;

/// List config files in `dir` with the given extension, sorted by file name
///
/// Sorting keeps the "last file wins" overwrite order independent of the
/// filesystem's iteration order.
pub fn config_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ExtractError> {
    let metadata = fs::metadata(dir)
        .map_err(|err| ExtractError::InvalidInput(format!("'{}': {}", dir.display(), err)))?;
    if !metadata.is_dir() {
        return Err(ExtractError::InvalidInput(format!(
            "'{}' is not a directory",
            dir.display()
        )));
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|err| ExtractError::io(dir, err))? {
        let path = entry.map_err(|err| ExtractError::io(dir, err))?.path();
        if path.is_file() && path.extension() == Some(OsStr::new(extension)) {
            files.push(path);
        } else {
            trace!("Skipping {}", path.display());
        }
    }
    files.sort();
    Ok(files)
}

/// Read a whole config into memory
/// Returns `None` for unreadable files when `skip_unreadable` is set
pub fn read_config(path: &Path, skip_unreadable: bool) -> Result<Option<String>, ExtractError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if skip_unreadable => {
            warn!("Skipping unreadable config {}: {}", path.display(), err);
            Ok(None)
        }
        Err(err) => Err(ExtractError::io(path, err)),
    }
}
