pub mod api_versions;
pub mod atomic_write;
pub mod changelog;
pub mod clean;
pub mod config_validator;
pub mod metadata;
pub mod version_bump;
