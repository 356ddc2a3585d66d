use async_trait::async_trait;
use std::io;
use std::path::Path;
use tokio::task;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<io::Result<FsEntry>>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut entries = Vec::new();
            for entry in std::fs::read_dir(&dir)? {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        entries.push(Err(err));
                        continue;
                    }
                };
                let kind = match entry.file_type() {
                    Ok(file_type) if file_type.is_symlink() => EntryKind::Symlink,
                    Ok(file_type) if file_type.is_dir() => EntryKind::Directory,
                    Ok(file_type) if file_type.is_file() => EntryKind::File,
                    _ => EntryKind::Other,
                };

                entries.push(Ok(FsEntry {
                    name: entry.file_name(),
                    kind,
                }));
            }
            Ok(entries)
        })
        .await
        .map_err(io::Error::other)?
    }

    async fn is_dir(&self, path: &Path) -> io::Result<bool> {
        let path = path.to_path_buf();
        task::spawn_blocking(move || std::fs::metadata(&path).map(|meta| meta.is_dir()))
            .await
            .map_err(io::Error::other)?
    }

    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        let (from, to) = (from.to_path_buf(), to.to_path_buf());
        task::spawn_blocking(move || std::fs::rename(&from, &to))
            .await
            .map_err(io::Error::other)?
    }

    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        let path = path.to_path_buf();
        task::spawn_blocking(move || std::fs::remove_file(&path))
            .await
            .map_err(io::Error::other)?
    }
}
