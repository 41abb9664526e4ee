// changelog updater
//
// splices freshly generated release entries into an existing changelog
// document, after the header and before the first existing entry

use super::config::UpdateConfig;
use super::marker::{is_entry_heading, parse_entry_marker};
use crate::error::{Error, Result};
use crate::utils::atomic_write::write_atomic;
use crate::utils::metadata::read_package_version;
use chrono::NaiveDate;
use std::fs;

/// a generated two-line changelog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub heading: String,
    pub message: String,
}

impl NewEntry {
    pub fn render(&self) -> String {
        format!("{}\n{}", self.heading, self.message)
    }
}

/// split a comma-separated api version argument into tokens
///
/// whitespace around tokens is trimmed and empty tokens are dropped, so
/// "v20250224, v20111101," normalizes to two identifiers
pub fn normalize_versions(arg: &str) -> Vec<String> {
    arg.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct ChangelogUpdater {
    config: UpdateConfig,
}

impl ChangelogUpdater {
    pub fn new(config: UpdateConfig) -> Self {
        Self { config }
    }

    /// update the changelog from a comma-separated identifier argument
    pub fn update_from_arg(&self, versions_arg: &str) -> Result<()> {
        let versions = normalize_versions(versions_arg);
        self.update(&versions)
    }

    /// insert one new entry per api version at the top of the changelog
    ///
    /// entries are ordered by the configured priority order regardless of
    /// input order; repeated runs append duplicate entries on purpose, since
    /// downstream tooling expects one entry per regeneration
    pub fn update<S: AsRef<str>>(&self, api_versions: &[S]) -> Result<()> {
        if api_versions.is_empty() {
            return Err(Error::InvalidArgument {
                reason: "no api versions supplied".to_string(),
            });
        }

        // check the document first so metadata errors never mask a missing
        // changelog
        if !self.config.changelog_path.exists() {
            return Err(Error::ChangelogNotFound {
                path: self.config.changelog_path.clone(),
            });
        }

        let mut pairs = Vec::with_capacity(api_versions.len());
        for api_version in api_versions {
            let api_version = api_version.as_ref();
            let number = read_package_version(&self.config.metadata_root, api_version)?;
            pairs.push((api_version.to_string(), number));
        }

        // stable sort: identifiers outside the priority order keep their
        // input order after all known identifiers
        pairs.sort_by_key(|(api_version, _)| self.priority_index(api_version));

        let contents =
            fs::read_to_string(&self.config.changelog_path).map_err(|e| Error::FileReadError {
                path: self.config.changelog_path.clone(),
                source: e,
            })?;
        let lines: Vec<&str> = contents.lines().collect();

        let entries: Vec<NewEntry> = pairs
            .iter()
            .map(|(api_version, number)| self.build_entry(&lines, api_version, number))
            .collect();

        let updated = self.splice_entries(&lines, &entries)?;
        write_atomic(&self.config.changelog_path, &updated)?;

        Ok(())
    }

    fn priority_index(&self, api_version: &str) -> usize {
        self.config
            .priority_order
            .iter()
            .position(|v| v == api_version)
            .unwrap_or(usize::MAX)
    }

    /// date of the most recent prior entry for an api version
    ///
    /// first marker found scanning top-to-bottom wins; entries are stored
    /// newest-first so that is the latest one
    fn last_change_date(&self, lines: &[&str], api_version: &str) -> Option<NaiveDate> {
        lines
            .iter()
            .filter_map(|line| parse_entry_marker(line))
            .find(|marker| marker.api_version == api_version)
            .map(|marker| marker.date)
    }

    fn build_entry(&self, lines: &[&str], api_version: &str, version_number: &str) -> NewEntry {
        let today = self.config.today.format("%Y-%m-%d");
        let heading = format!("## [{}] - {} ({} API)", version_number, today, api_version);

        let message = match self.last_change_date(lines, api_version) {
            Some(last) => format!(
                "Updated {} API specification to most current version. Please check full \
                 [API changelog]({}) for any changes made between {} and {}.",
                api_version,
                self.config.api_changelog_url,
                last.format("%Y-%m-%d"),
                today
            ),
            None => format!(
                "Updated {} API specification to most current version. Please check full \
                 [API changelog]({}) for any changes.",
                api_version, self.config.api_changelog_url
            ),
        };

        NewEntry { heading, message }
    }

    /// rebuild the document as header + new entries + blank line + old entries
    fn splice_entries(&self, lines: &[&str], entries: &[NewEntry]) -> Result<String> {
        let first_entry_index = lines
            .iter()
            .position(|line| is_entry_heading(line))
            .ok_or_else(|| Error::NoExistingEntries {
                path: self.config.changelog_path.clone(),
            })?;

        let mut out: Vec<String> = lines[..first_entry_index]
            .iter()
            .map(|s| s.to_string())
            .collect();
        for entry in entries {
            out.push(entry.render().trim_end().to_string());
        }
        out.push(String::new());
        out.extend(lines[first_entry_index..].iter().map(|s| s.to_string()));

        Ok(out.join("\n"))
    }
}
