use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::spec::ReplicateError;

////////////////////////////////////////////////////////////////////////////////
// #region Listing

#[derive(Debug, Clone)]
pub(crate) struct SpecSourceEntry {
    pub(crate) path_src: PathBuf,
    pub(crate) name_entry: OsString,
}

/// List immediate entries of `path_dir_src`, sorted by name.
///
/// The listing is read to completion before anything is returned, so a
/// failure here means no entry of this directory has been touched.
pub(crate) fn list_source_entries(
    path_dir_src: &Path,
) -> Result<Vec<SpecSourceEntry>, ReplicateError> {
    let err_unreadable = |source: io::Error| ReplicateError::SourceUnreadable {
        path: path_dir_src.to_path_buf(),
        source,
    };

    let mut l_entries = Vec::new();
    for entry_res in fs::read_dir(path_dir_src).map_err(err_unreadable)? {
        let entry = entry_res.map_err(err_unreadable)?;
        l_entries.push(SpecSourceEntry {
            path_src: entry.path(),
            name_entry: entry.file_name(),
        });
    }
    l_entries.sort_by(|a, b| a.name_entry.cmp(&b.name_entry));
    Ok(l_entries)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Destination

pub(crate) fn validate_destination(path_dir_dst: &Path) -> Result<(), ReplicateError> {
    match fs::metadata(path_dir_dst) {
        Ok(meta_dst) if meta_dst.is_dir() => Ok(()),
        Ok(_) => Err(ReplicateError::DestinationNotDirectory(
            path_dir_dst.to_path_buf(),
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(
            ReplicateError::DestinationMissing(path_dir_dst.to_path_buf()),
        ),
        Err(e) => Err(ReplicateError::DestinationUnreadable {
            path: path_dir_dst.to_path_buf(),
            source: e,
        }),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Copy

/// Copy one entry as a file, following symlinks.
///
/// Content and permission bits are copied; an existing destination file is
/// replaced. Returns whether a destination file was replaced.
pub(crate) fn copy_entry_as_file(
    path_src: &Path,
    path_dst: &Path,
) -> Result<bool, ReplicateError> {
    let err_copy = |source: io::Error| ReplicateError::CopyFailed {
        path_src: path_src.to_path_buf(),
        path_dst: path_dst.to_path_buf(),
        source,
    };

    let meta_src = fs::metadata(path_src).map_err(err_copy)?;
    if meta_src.is_dir() {
        return Err(ReplicateError::EntryIsDirectory(path_src.to_path_buf()));
    }

    if is_same_file(&meta_src, path_src, path_dst) {
        return Err(ReplicateError::SameFile {
            path_src: path_src.to_path_buf(),
            path_dst: path_dst.to_path_buf(),
        });
    }

    let if_overwrote = fs::symlink_metadata(path_dst).is_ok();
    fs::copy(path_src, path_dst).map_err(err_copy)?;
    Ok(if_overwrote)
}

/// Whether `path_dst` resolves to the same file as `path_src`.
///
/// `fs::copy` truncates the destination before reading, so copying a file
/// onto itself empties it.
fn is_same_file(meta_src: &fs::Metadata, path_src: &Path, path_dst: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        let _ = path_src;
        match fs::metadata(path_dst) {
            Ok(meta_dst) => {
                meta_src.dev() == meta_dst.dev() && meta_src.ino() == meta_dst.ino()
            }
            Err(_) => false,
        }
    }
    #[cfg(not(unix))]
    {
        let _ = meta_src;
        match (fs::canonicalize(path_src), fs::canonicalize(path_dst)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
