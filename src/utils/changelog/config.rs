// changelog update configuration

use crate::utils::api_versions::ApiVersionRegistry;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// configuration for changelog updates
///
/// everything the updater touches is injectable so tests can run against
/// temporary documents and manifests
#[derive(Debug, Clone)]
pub struct UpdateConfig {
    /// path of the changelog document to rewrite
    pub changelog_path: PathBuf,

    /// base path under which `<api_version>/package.json` manifests live
    pub metadata_root: PathBuf,

    /// api versions in priority order (newest first); entries for earlier
    /// identifiers are placed before entries for later ones
    pub priority_order: Vec<String>,

    /// url of the full api changelog referenced from every entry message
    pub api_changelog_url: String,

    /// date stamped onto generated entries
    pub today: NaiveDate,
}

impl UpdateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changelog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.changelog_path = path.into();
        self
    }

    pub fn metadata_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.metadata_root = path.into();
        self
    }

    pub fn priority_order(mut self, order: Vec<String>) -> Self {
        self.priority_order = order;
        self
    }

    pub fn api_changelog_url(mut self, url: impl Into<String>) -> Self {
        self.api_changelog_url = url.into();
        self
    }

    pub fn today(mut self, date: NaiveDate) -> Self {
        self.today = date;
        self
    }
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            changelog_path: PathBuf::from("CHANGELOG.md"),
            metadata_root: PathBuf::from("."),
            priority_order: ApiVersionRegistry::default()
                .names()
                .map(str::to_string)
                .collect(),
            api_changelog_url: "https://docs.mx.com/resources/changelog/platform".to_string(),
            today: Local::now().date_naive(),
        }
    }
}
