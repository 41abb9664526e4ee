// package metadata access

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// the subset of a package manifest the release tooling cares about
#[derive(Debug, Clone, Deserialize)]
pub struct PackageMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// path of the metadata file for one api version under the metadata root
pub fn metadata_path(metadata_root: &Path, api_version: &str) -> PathBuf {
    metadata_root.join(api_version).join("package.json")
}

/// read the release version number for an api version
///
/// fails if the manifest is missing, malformed, or carries no non-empty
/// version field
pub fn read_package_version(metadata_root: &Path, api_version: &str) -> Result<String> {
    let path = metadata_path(metadata_root, api_version);

    if !path.exists() {
        return Err(Error::MetadataNotFound { path });
    }

    let contents = fs::read_to_string(&path).map_err(|e| Error::FileReadError {
        path: path.clone(),
        source: e,
    })?;

    let metadata: PackageMetadata =
        serde_json::from_str(&contents).map_err(|e| Error::MetadataParseError {
            path: path.clone(),
            source: e,
        })?;

    match metadata.version {
        Some(version) if !version.is_empty() => Ok(version),
        _ => Err(Error::VersionFieldMissing { path }),
    }
}
