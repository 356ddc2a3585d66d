mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use async_trait::async_trait;
use std::io;
use std::path::Path;

use crate::models::FsEntry;

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Immediate entries of `dir`. An entry that could not be read is an
    /// inner `Err` so the rest of the listing survives.
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<io::Result<FsEntry>>>;

    /// Whether `path` resolves to a directory, following symlinks.
    async fn is_dir(&self, path: &Path) -> io::Result<bool>;

    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    async fn remove_file(&self, path: &Path) -> io::Result<()>;
}
