// atomic file replacement

use crate::error::{Error, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// replace a file's contents via a temp file and rename
///
/// the temp file is created in the target's directory so the final rename
/// stays on one filesystem; a crash mid-write leaves the original untouched
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::FileWriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    tmp.write_all(contents.as_bytes())
        .map_err(|e| Error::FileWriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

    tmp.persist(path).map_err(|e| Error::FileWriteError {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    Ok(())
}
