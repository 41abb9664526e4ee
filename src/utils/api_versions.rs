// supported api version registry

use serde::{Deserialize, Serialize};

/// a single supported api version and the npm major version locked to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiVersionSpec {
    /// identifier token, e.g. "v20250224"
    pub name: String,
    /// npm major version every release of this api version must carry
    pub expected_major: u64,
}

impl ApiVersionSpec {
    pub fn new(name: impl Into<String>, expected_major: u64) -> Self {
        Self {
            name: name.into(),
            expected_major,
        }
    }
}

/// registry of supported api versions, in priority order (newest first)
///
/// the order controls where multi-version changelog entries land relative to
/// each other: earlier in the registry means earlier in the changelog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiVersionRegistry {
    specs: Vec<ApiVersionSpec>,
}

impl ApiVersionRegistry {
    pub fn new(specs: Vec<ApiVersionSpec>) -> Self {
        Self { specs }
    }

    pub fn is_supported(&self, api_version: &str) -> bool {
        self.specs.iter().any(|s| s.name == api_version)
    }

    /// position in the priority order, if registered
    pub fn priority_index(&self, api_version: &str) -> Option<usize> {
        self.specs.iter().position(|s| s.name == api_version)
    }

    pub fn expected_major(&self, api_version: &str) -> Option<u64> {
        self.specs
            .iter()
            .find(|s| s.name == api_version)
            .map(|s| s.expected_major)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|s| s.name.as_str())
    }

    /// comma-separated identifier list for error and usage messages
    pub fn supported_list(&self) -> String {
        self.names().collect::<Vec<_>>().join(", ")
    }
}

impl Default for ApiVersionRegistry {
    fn default() -> Self {
        Self::new(vec![
            ApiVersionSpec::new("v20250224", 3),
            ApiVersionSpec::new("v20111101", 2),
        ])
    }
}
