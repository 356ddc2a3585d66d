use std::path::Path;

use tracing::{debug, info, warn};

use super::rule::RenameRule;
use crate::error::RenameError;
use crate::fs::FileSystem;
use crate::models::{EntryKind, FsEntry, RenameReport};

/// What to do when renaming a directory fails.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum DirectoryFallback {
    /// Record the failure and leave the directory in place
    #[default]
    Skip,
    /// Attempt the same file removal used for files (always fails on a directory)
    RemoveFile,
}

/// Configuration options for a rename pass.
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    /// Substring pair applied to every entry name
    pub rule: RenameRule,
    /// Handling of directories whose rename failed
    pub directory_fallback: DirectoryFallback,
}

/// Rename every entry under `root` whose name contains the rule's target.
///
/// Traversal is depth-first and post-order: a directory's children are fully
/// handled before the directory's own name is considered. Failures are
/// isolated per entry, logged, and collected in the report. Only a failure to
/// list `root` itself is returned as an error.
pub async fn process<F: FileSystem>(
    fs: &F,
    root: &Path,
    options: &RenameOptions,
) -> Result<RenameReport, RenameError> {
    let mut report = RenameReport::default();
    process_dir(fs, root, options, &mut report).await?;

    debug!(
        root = %root.display(),
        renamed = report.renamed,
        removed = report.removed,
        failed = report.failures.len(),
        "traversal finished"
    );
    Ok(report)
}

async fn process_dir<F: FileSystem>(
    fs: &F,
    dir: &Path,
    options: &RenameOptions,
    report: &mut RenameReport,
) -> Result<(), RenameError> {
    let entries = fs
        .read_dir(dir)
        .await
        .map_err(|source| RenameError::List {
            path: dir.to_path_buf(),
            source,
        })?;

    for entry in entries {
        let result = match entry {
            Ok(entry) => process_entry(fs, dir, &entry, options, report).await,
            Err(source) => Err(RenameError::List {
                path: dir.to_path_buf(),
                source,
            }),
        };
        if let Err(err) = result {
            warn!(operation = %err.operation(), "{err}");
            report.failures.push(err);
        }
    }

    Ok(())
}

/// Directories are descended into, and so is anything that resolves to one
/// (symlinks to directories, entries of unknown type).
async fn leads_to_dir<F: FileSystem>(fs: &F, path: &Path, kind: EntryKind) -> bool {
    match kind {
        EntryKind::Directory => true,
        EntryKind::File => false,
        EntryKind::Symlink | EntryKind::Other => match fs.is_dir(path).await {
            Ok(is_dir) => is_dir,
            Err(err) => {
                debug!(path = %path.display(), "cannot resolve entry type: {err}");
                false
            }
        },
    }
}

async fn process_entry<F: FileSystem>(
    fs: &F,
    dir: &Path,
    entry: &FsEntry,
    options: &RenameOptions,
    report: &mut RenameReport,
) -> Result<(), RenameError> {
    let full_path = dir.join(&entry.name);
    let path = full_path.as_path();

    let descend = leads_to_dir(fs, path, entry.kind).await;
    if descend {
        Box::pin(process_dir(fs, path, options, report)).await?;
    }

    let Some(new_name) = options.rule.apply_os(&entry.name) else {
        return Ok(());
    };
    let new_path = dir.join(&new_name);

    let rename_error = match fs.rename(path, &new_path).await {
        Ok(()) => {
            info!(from = %path.display(), to = %new_path.display(), "renamed");
            report.renamed += 1;
            return Ok(());
        }
        Err(err) => err,
    };

    // A symlink is removed like a file even when it points at a directory
    let is_directory = descend && entry.kind != EntryKind::Symlink;
    if is_directory && options.directory_fallback == DirectoryFallback::Skip {
        return Err(RenameError::Rename {
            from: path.to_path_buf(),
            to: new_path,
            source: rename_error,
        });
    }

    match fs.remove_file(path).await {
        Ok(()) => {
            info!(
                path = %path.display(),
                cause = %rename_error,
                "removed after failed rename"
            );
            report.removed += 1;
            Ok(())
        }
        Err(source) => Err(RenameError::RemoveFallback {
            path: path.to_path_buf(),
            rename_error,
            source,
        }),
    }
}
