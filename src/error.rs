//! Per-entry failures raised while renaming a tree.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The filesystem call that failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    List,
    Rename,
    Remove,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Rename => "rename",
            Operation::Remove => "remove",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("{} cannot list directory: {source}", .path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} cannot rename to {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rename failed and so did deleting the original.
    #[error(
        "{} cannot remove after failed rename ({rename_error}): {source}",
        .path.display()
    )]
    RemoveFallback {
        path: PathBuf,
        rename_error: io::Error,
        #[source]
        source: io::Error,
    },
}

impl RenameError {
    pub fn path(&self) -> &Path {
        match self {
            RenameError::List { path, .. } => path,
            RenameError::Rename { from, .. } => from,
            RenameError::RemoveFallback { path, .. } => path,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            RenameError::List { .. } => Operation::List,
            RenameError::Rename { .. } => Operation::Rename,
            RenameError::RemoveFallback { .. } => Operation::Remove,
        }
    }
}
