// config version bumping
//
// rewrites the npmVersion field of a generator config; the major component is
// locked to the api version, so only minor and patch bumps exist

use crate::error::{Error, Result};
use crate::utils::atomic_write::write_atomic;
use crate::utils::config_validator::load_config_mapping;
use semver::Version;
use serde_yaml::Value;
use std::path::Path;
use std::str::FromStr;

/// fallback config used when workflows omit the path; the automated openapi
/// dispatch currently only regenerates v20111101
pub const DEFAULT_CONFIG_PATH: &str = "openapi/config-v20111101.yml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Minor,
    Patch,
}

impl FromStr for BumpKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(Error::InvalidArgument {
                reason: format!(
                    "invalid version bump type: {}. supported: 'minor' or 'patch'",
                    other
                ),
            }),
        }
    }
}

/// apply a bump to a parsed version
pub fn apply_bump(version: &Version, kind: BumpKind) -> Version {
    match kind {
        BumpKind::Minor => Version::new(version.major, version.minor + 1, 0),
        BumpKind::Patch => Version::new(version.major, version.minor, version.patch + 1),
    }
}

/// bump the npmVersion stored in a config file, returning the new version
///
/// every other key in the config survives the rewrite untouched
pub fn bump_config_version(config_path: &Path, kind: BumpKind) -> Result<String> {
    let mut config = load_config_mapping(config_path)?;

    let current = match config.get("npmVersion") {
        Some(Value::String(s)) => s.clone(),
        Some(_) | None => {
            return Err(Error::ConfigStructure {
                path: config_path.to_path_buf(),
                reason: "missing npmVersion field".to_string(),
            });
        }
    };

    let version = Version::parse(current.trim()).map_err(|e| Error::SemverRule {
        path: config_path.to_path_buf(),
        reason: format!("npmVersion '{}' is not a semantic version ({})", current, e),
    })?;

    let bumped = apply_bump(&version, kind).to_string();
    config.insert(
        Value::String("npmVersion".to_string()),
        Value::String(bumped.clone()),
    );

    let rendered = serde_yaml::to_string(&config).map_err(|e| Error::YamlParseError {
        path: config_path.to_path_buf(),
        source: e,
    })?;
    write_atomic(config_path, &rendered)?;

    Ok(bumped)
}
