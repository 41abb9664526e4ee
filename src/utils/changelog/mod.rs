// changelog update module

pub mod config;
pub mod marker;
pub mod updater;

pub use config::UpdateConfig;
pub use marker::{EntryMarker, is_entry_heading, parse_entry_marker};
pub use updater::{ChangelogUpdater, NewEntry, normalize_versions};
