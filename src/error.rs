use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    InvalidArgument {
        reason: String,
    },
    ChangelogNotFound {
        path: PathBuf,
    },
    MetadataNotFound {
        path: PathBuf,
    },
    MetadataParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    VersionFieldMissing {
        path: PathBuf,
    },
    NoExistingEntries {
        path: PathBuf,
    },
    UnsupportedApiVersion {
        api_version: String,
        supported: String,
    },
    ConfigNotFound {
        path: PathBuf,
    },
    YamlParseError {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    ConfigStructure {
        path: PathBuf,
        reason: String,
    },
    SemverRule {
        path: PathBuf,
        reason: String,
    },
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    FileWriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { reason } => {
                write!(f, "invalid argument: {}", reason)
            }
            Error::ChangelogNotFound { path } => {
                write!(f, "changelog not found at {}", path.display())
            }
            Error::MetadataNotFound { path } => {
                write!(f, "package metadata not found at {}", path.display())
            }
            Error::MetadataParseError { path, source } => {
                write!(
                    f,
                    "failed to parse package metadata {} ({})",
                    path.display(),
                    source
                )
            }
            Error::VersionFieldMissing { path } => {
                write!(f, "could not read version field from {}", path.display())
            }
            Error::NoExistingEntries { path } => {
                write!(
                    f,
                    "no existing changelog entries in {} (expected format: ## [version])",
                    path.display()
                )
            }
            Error::UnsupportedApiVersion {
                api_version,
                supported,
            } => {
                write!(
                    f,
                    "invalid api version: {}. supported versions: {}",
                    api_version, supported
                )
            }
            Error::ConfigNotFound { path } => {
                write!(f, "config file not found: {}", path.display())
            }
            Error::YamlParseError { path, source } => {
                write!(
                    f,
                    "config file syntax error in {}: {}",
                    path.display(),
                    source
                )
            }
            Error::ConfigStructure { path, reason } => {
                write!(f, "invalid config {}: {}", path.display(), reason)
            }
            Error::SemverRule { path, reason } => {
                write!(
                    f,
                    "semantic versioning error in {}: {}",
                    path.display(),
                    reason
                )
            }
            Error::FileReadError { path, source } => {
                write!(f, "failed to read file: {} ({})", path.display(), source)
            }
            Error::FileWriteError { path, source } => {
                write!(f, "failed to write file: {} ({})", path.display(), source)
            }
            Error::IoError(err) => {
                write!(f, "io error: {}", err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MetadataParseError { source, .. } => Some(source),
            Error::YamlParseError { source, .. } => Some(source),
            Error::FileReadError { source, .. } => Some(source),
            Error::FileWriteError { source, .. } => Some(source),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}
