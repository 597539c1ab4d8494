//! Replication options, fixed layout constants and the top-level error type.

use std::fmt;
use std::io;
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////
// #region Constants

/// Source directories, in processing order.
pub const DIRS_SOURCE_DEFAULT: [&str; 4] = ["css", "img", "js", "templates"];

/// Destination directory. Must exist before a run.
pub const DIR_DESTINATION_DEFAULT: &str = "testing";

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Input options for `replicate`.
///
/// Relative paths are resolved against the root passed to `replicate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecReplicateOptions {
    /// Source directories. Later entries win on base-name collisions.
    pub dirs_source: Vec<PathBuf>,
    /// Flat destination directory.
    pub dir_destination: PathBuf,
}

impl Default for SpecReplicateOptions {
    fn default() -> Self {
        Self {
            dirs_source: DIRS_SOURCE_DEFAULT.iter().map(PathBuf::from).collect(),
            dir_destination: PathBuf::from(DIR_DESTINATION_DEFAULT),
        }
    }
}

/// Failure that aborts a replication run.
#[derive(Debug)]
pub enum ReplicateError {
    /// Source directory is missing or cannot be listed.
    SourceUnreadable {
        /// Source directory path.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Destination directory does not exist.
    DestinationMissing(PathBuf),
    /// Destination directory cannot be inspected.
    DestinationUnreadable {
        /// Destination directory path.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Destination path exists but is not a directory.
    DestinationNotDirectory(PathBuf),
    /// A source entry is a directory and cannot be copied as a file.
    EntryIsDirectory(PathBuf),
    /// Destination entry resolves to the source entry itself.
    SameFile {
        /// Source entry path.
        path_src: PathBuf,
        /// Destination file path.
        path_dst: PathBuf,
    },
    /// Copying one entry failed.
    CopyFailed {
        /// Source entry path.
        path_src: PathBuf,
        /// Destination file path.
        path_dst: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
}

impl fmt::Display for ReplicateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceUnreadable { path, source } => {
                write!(f, "Failed to list source directory {}: {source}", path.display())
            }
            Self::DestinationMissing(path) => {
                write!(f, "Destination directory does not exist: {}", path.display())
            }
            Self::DestinationUnreadable { path, source } => {
                write!(f, "Failed to inspect destination {}: {source}", path.display())
            }
            Self::DestinationNotDirectory(path) => {
                write!(f, "Destination is not a directory: {}", path.display())
            }
            Self::EntryIsDirectory(path) => {
                write!(f, "Source entry is a directory, expected file: {}", path.display())
            }
            Self::SameFile { path_src, path_dst } => write!(
                f,
                "Source and destination are the same file: {} -> {}",
                path_src.display(),
                path_dst.display()
            ),
            Self::CopyFailed {
                path_src,
                path_dst,
                source,
            } => write!(
                f,
                "Failed to copy {} -> {}: {source}",
                path_src.display(),
                path_dst.display()
            ),
        }
    }
}

impl std::error::Error for ReplicateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceUnreadable { source, .. }
            | Self::DestinationUnreadable { source, .. }
            | Self::CopyFailed { source, .. } => Some(source),
            Self::DestinationMissing(_)
            | Self::DestinationNotDirectory(_)
            | Self::EntryIsDirectory(_)
            | Self::SameFile { .. } => None,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
