//! Flat replication of source directories into one destination directory.

use std::path::Path;

use tracing::debug;

use crate::report::{ReportReplicate, ReportReplicateBuilder};
use crate::spec::{ReplicateError, SpecReplicateOptions};
use crate::util::{copy_entry_as_file, list_source_entries, validate_destination};

/// Copy the immediate entries of every source directory into the destination.
///
/// Paths in `spec_options` are resolved against `dir_root`. For each source
/// directory, in list order:
/// 1. List its immediate entries (no recursion).
/// 2. Copy each entry to `<destination>/<entry name>`, replacing any existing
///    file with that name.
///
/// The destination must already exist; it is never created. The first
/// failure aborts the run and is returned as-is. Files copied before the
/// failure stay in place and later entries are not attempted.
///
/// Returns [`ReportReplicate`] when every entry was copied.
pub fn replicate<P>(
    dir_root: P,
    spec_options: &SpecReplicateOptions,
) -> Result<ReportReplicate, ReplicateError>
where
    P: AsRef<Path>,
{
    let path_dir_root = dir_root.as_ref();
    let path_dir_dst = path_dir_root.join(&spec_options.dir_destination);
    validate_destination(&path_dir_dst)?;

    let mut builder_report = ReportReplicateBuilder::default();
    for dir_source in &spec_options.dirs_source {
        let path_dir_src = path_dir_root.join(dir_source);
        replicate_directory(&path_dir_src, &path_dir_dst, &mut builder_report)?;
        builder_report.add_dir();
    }
    Ok(builder_report.build())
}

fn replicate_directory(
    path_dir_src: &Path,
    path_dir_dst: &Path,
    builder_report: &mut ReportReplicateBuilder,
) -> Result<(), ReplicateError> {
    let l_entries = list_source_entries(path_dir_src)?;
    debug!(
        "listed {} entries in {}",
        l_entries.len(),
        path_dir_src.display()
    );
    builder_report.add_scanned(l_entries.len() as u64);

    for spec_entry in l_entries {
        let path_dst = path_dir_dst.join(&spec_entry.name_entry);
        let if_overwrote = copy_entry_as_file(&spec_entry.path_src, &path_dst)?;
        debug!(
            overwrote = if_overwrote,
            "copied {} -> {}",
            spec_entry.path_src.display(),
            path_dst.display()
        );
        builder_report.add_copied(if_overwrote);
    }
    Ok(())
}
