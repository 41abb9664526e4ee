// generator config validation
//
// release workflows run this before invoking the SDK generator, so a config
// that drifted from its api version's version contract fails fast

use crate::error::{Error, Result};
use crate::utils::api_versions::ApiVersionRegistry;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// validates a generator YAML config against an api version
///
/// each supported api version locks the config's npm major version; minor
/// and patch may move freely
pub struct ConfigValidator {
    registry: ApiVersionRegistry,
}

impl ConfigValidator {
    pub fn new(registry: ApiVersionRegistry) -> Self {
        Self { registry }
    }

    pub fn validate(&self, config_path: &Path, api_version: &str) -> Result<()> {
        let expected_major = self.check_api_version_supported(api_version)?;
        let config = load_config_mapping(config_path)?;
        self.check_semantic_versioning(config_path, &config, api_version, expected_major)
    }

    fn check_api_version_supported(&self, api_version: &str) -> Result<u64> {
        self.registry
            .expected_major(api_version)
            .ok_or_else(|| Error::UnsupportedApiVersion {
                api_version: api_version.to_string(),
                supported: self.registry.supported_list(),
            })
    }

    fn check_semantic_versioning(
        &self,
        config_path: &Path,
        config: &serde_yaml::Mapping,
        api_version: &str,
        expected_major: u64,
    ) -> Result<()> {
        let npm_version = match config.get("npmVersion") {
            Some(value) => scalar_to_string(value),
            None => {
                return Err(Error::ConfigStructure {
                    path: config_path.to_path_buf(),
                    reason: "missing npmVersion field".to_string(),
                });
            }
        };

        let npm_version = npm_version.trim();
        let found_major = leading_major(npm_version);

        if found_major != expected_major {
            return Err(Error::SemverRule {
                path: config_path.to_path_buf(),
                reason: format!(
                    "{} API must use npm major version {}, found {} (npmVersion: {}); \
                     update config with correct major version: {}.x.x",
                    api_version, expected_major, found_major, npm_version, expected_major
                ),
            });
        }

        Ok(())
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new(ApiVersionRegistry::default())
    }
}

/// read a YAML config, requiring a top-level mapping
pub fn load_config_mapping(config_path: &Path) -> Result<serde_yaml::Mapping> {
    if !config_path.exists() {
        return Err(Error::ConfigNotFound {
            path: config_path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(config_path).map_err(|e| Error::FileReadError {
        path: config_path.to_path_buf(),
        source: e,
    })?;

    let value: Value = serde_yaml::from_str(&contents).map_err(|e| Error::YamlParseError {
        path: config_path.to_path_buf(),
        source: e,
    })?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(Error::ConfigStructure {
            path: config_path.to_path_buf(),
            reason: "does not contain a YAML mapping".to_string(),
        }),
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => serde_yaml::to_string(other)
            .unwrap_or_default()
            .trim_end()
            .to_string(),
    }
}

/// leading major component of a dotted version, non-numeric input counts as 0
fn leading_major(version: &str) -> u64 {
    version
        .split('.')
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0)
}
