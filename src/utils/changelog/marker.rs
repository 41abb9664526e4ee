// changelog entry marker parsing

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// a parsed entry marker line, e.g. `## [2.0.0] - 2025-01-15 (v20111101 API)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryMarker {
    pub version: String,
    pub date: NaiveDate,
    pub api_version: String,
}

/// true for any line that starts an entry section
///
/// deliberately looser than `parse_entry_marker`: the splice point accepts any
/// `## [` heading so hand-written historical entries keep working
pub fn is_entry_heading(line: &str) -> bool {
    line.starts_with("## [")
}

fn is_dotted_triple(s: &str) -> bool {
    let mut segments = 0;
    for segment in s.split('.') {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        segments += 1;
    }
    segments == 3
}

/// parse a full entry marker, returning None for anything that does not match
/// the `## [x.y.z] - YYYY-MM-DD (<api_version> API)` shape
pub fn parse_entry_marker(line: &str) -> Option<EntryMarker> {
    let rest = line.strip_prefix("## [")?;
    let (version, rest) = rest.split_once(']')?;
    if !is_dotted_triple(version) {
        return None;
    }

    let rest = rest.trim_start().strip_prefix('-')?.trim_start();
    let (date_str, rest) = rest.split_at_checked(10)?;
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()?;

    let rest = rest.trim_start().strip_prefix('(')?;
    let (label, _) = rest.split_once(')')?;
    let label = label.trim();
    let prefix = label.strip_suffix("API")?;
    if !prefix.ends_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let api_version = prefix.trim_end();
    if api_version.is_empty() {
        return None;
    }

    Some(EntryMarker {
        version: version.to_string(),
        date,
        api_version: api_version.to_string(),
    })
}
