use relkit::{ApiVersionRegistry, ConfigValidator, Error};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(temp: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_valid_configs_across_supported_versions() {
    let temp = TempDir::new().unwrap();
    let validator = ConfigValidator::default();
    let registry = ApiVersionRegistry::default();

    // any minor/patch combination passes as long as the major matches
    for api_version in registry.names() {
        let major = registry.expected_major(api_version).unwrap();
        for minor in [0, 1, 5, 10] {
            for patch in [0, 1, 5, 10] {
                let path = write_config(
                    &temp,
                    "config.yml",
                    &format!(
                        "npmVersion: {}.{}.{}\napiVersion: {}\n",
                        major, minor, patch, api_version
                    ),
                );
                validator.validate(&path, api_version).unwrap();
            }
        }
    }
}

#[test]
fn test_rejects_wrong_major_for_each_version() {
    let temp = TempDir::new().unwrap();
    let validator = ConfigValidator::default();
    let registry = ApiVersionRegistry::default();

    for api_version in registry.names() {
        let expected = registry.expected_major(api_version).unwrap();
        let wrong = if expected == 2 { 3 } else { 2 };
        let path = write_config(
            &temp,
            "config.yml",
            &format!("npmVersion: {}.0.0\n", wrong),
        );

        let err = validator.validate(&path, api_version).unwrap_err();
        assert!(matches!(err, Error::SemverRule { .. }));
    }
}

#[test]
fn test_semver_error_message_is_actionable() {
    let temp = TempDir::new().unwrap();
    let validator = ConfigValidator::default();
    let path = write_config(&temp, "config.yml", "npmVersion: 3.0.0\n");

    let err = validator.validate(&path, "v20111101").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("must use npm major version 2"));
    assert!(message.contains("found 3"));
    assert!(message.contains("2.x.x"));
}

#[test]
fn test_unsupported_api_version_lists_supported_ones() {
    let temp = TempDir::new().unwrap();
    let validator = ConfigValidator::default();
    let path = write_config(&temp, "config.yml", "npmVersion: 2.0.0\n");

    let err = validator.validate(&path, "v99999999").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("invalid api version: v99999999"));
    assert!(message.contains("v20250224"));
    assert!(message.contains("v20111101"));
}

#[test]
fn test_missing_config_file() {
    let temp = TempDir::new().unwrap();
    let validator = ConfigValidator::default();
    let path = temp.path().join("absent.yml");

    let err = validator.validate(&path, "v20111101").unwrap_err();
    assert!(matches!(err, Error::ConfigNotFound { .. }));
}

#[test]
fn test_malformed_yaml() {
    let temp = TempDir::new().unwrap();
    let validator = ConfigValidator::default();
    let path = write_config(&temp, "config.yml", "  invalid: yaml: invalid syntax:\n");

    let err = validator.validate(&path, "v20111101").unwrap_err();
    assert!(matches!(
        err,
        Error::YamlParseError { .. } | Error::ConfigStructure { .. }
    ));
}

#[test]
fn test_scalar_document_is_rejected() {
    let temp = TempDir::new().unwrap();
    let validator = ConfigValidator::default();
    let path = write_config(&temp, "config.yml", "just a string\n");

    let err = validator.validate(&path, "v20111101").unwrap_err();
    assert!(matches!(err, Error::ConfigStructure { .. }));
}

#[test]
fn test_missing_npm_version_field() {
    let temp = TempDir::new().unwrap();
    let validator = ConfigValidator::default();
    let path = write_config(
        &temp,
        "config.yml",
        "generatorName: typescript-axios\napiVersion: v20111101\n",
    );

    let err = validator.validate(&path, "v20111101").unwrap_err();
    match err {
        Error::ConfigStructure { reason, .. } => assert!(reason.contains("npmVersion")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_custom_registry() {
    let temp = TempDir::new().unwrap();
    let registry = ApiVersionRegistry::new(vec![relkit::ApiVersionSpec::new("v20300101", 4)]);
    let validator = ConfigValidator::new(registry);

    let path = write_config(&temp, "config.yml", "npmVersion: 4.0.0\n");
    validator.validate(&path, "v20300101").unwrap();

    let err = validator.validate(&path, "v20111101").unwrap_err();
    assert!(matches!(err, Error::UnsupportedApiVersion { .. }));
}
