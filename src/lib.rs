pub mod error;
pub mod utils;

pub use error::*;
pub use utils::api_versions::{ApiVersionRegistry, ApiVersionSpec};
pub use utils::changelog::{
    ChangelogUpdater, EntryMarker, NewEntry, UpdateConfig, is_entry_heading, normalize_versions,
    parse_entry_marker,
};
pub use utils::clean::{CleanOutcome, clean_version_dir};
pub use utils::config_validator::ConfigValidator;
pub use utils::metadata::{PackageMetadata, metadata_path, read_package_version};
pub use utils::version_bump::{BumpKind, DEFAULT_CONFIG_PATH, apply_bump, bump_config_version};
