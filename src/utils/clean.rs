// generator output cleanup
//
// version-targeted deletion: workflows name the one version directory to
// clear before regeneration, nothing else is ever touched

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// outcome of a cleanup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanOutcome {
    /// the directory existed and was removed
    Deleted(PathBuf),
    /// nothing to do; generation will create the directory
    NotFound(PathBuf),
}

/// delete one version directory under the base path
pub fn clean_version_dir(base: &Path, target_dir: &str) -> Result<CleanOutcome> {
    if target_dir.is_empty() {
        return Err(Error::InvalidArgument {
            reason: "version directory parameter required".to_string(),
        });
    }

    let target_path = base.join(target_dir);
    if target_path.exists() {
        fs::remove_dir_all(&target_path).map_err(|e| Error::FileWriteError {
            path: target_path.clone(),
            source: e,
        })?;
        Ok(CleanOutcome::Deleted(target_path))
    } else {
        Ok(CleanOutcome::NotFound(target_path))
    }
}
