use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

/// In-memory tree. Listings come back sorted by path, and renaming onto an
/// existing path fails, so collisions can be forced on any platform.
/// Non-directory nodes listed in `dir_targets` resolve to a directory, the
/// way a symlink to a directory does.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    nodes: BTreeMap<PathBuf, EntryKind>,
    dir_targets: HashSet<PathBuf>,
    entry_errors: HashMap<PathBuf, Vec<String>>,
    list_errors: HashMap<PathBuf, (io::ErrorKind, String)>,
    rename_errors: HashMap<PathBuf, (io::ErrorKind, String)>,
    remove_errors: HashMap<PathBuf, (io::ErrorKind, String)>,
    ops: Vec<String>,
}

impl MockFileSystem {
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        self.add(path, EntryKind::Directory);
    }

    pub fn add_file(&self, path: impl Into<PathBuf>) {
        self.add(path, EntryKind::File);
    }

    pub fn add_symlink(&self, path: impl Into<PathBuf>) {
        self.add(path, EntryKind::Symlink);
    }

    /// A symlink whose target is a directory; its children live under `path`.
    pub fn add_dir_symlink(&self, path: impl Into<PathBuf>) {
        self.add_resolving_dir(path.into(), EntryKind::Symlink);
    }

    /// A directory whose entry type could not be read from the listing.
    pub fn add_untyped_dir(&self, path: impl Into<PathBuf>) {
        self.add_resolving_dir(path.into(), EntryKind::Other);
    }

    fn add_resolving_dir(&self, path: PathBuf, kind: EntryKind) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.dir_targets.insert(path.clone());
        inner.nodes.insert(path, kind);
    }

    fn add(&self, path: impl Into<PathBuf>, kind: EntryKind) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.nodes.insert(path.into(), kind);
    }

    pub fn set_list_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.list_errors.insert(
            dir.into(),
            (io::ErrorKind::PermissionDenied, message.into()),
        );
    }

    /// Appends an unreadable entry to the listing of `dir`.
    pub fn add_entry_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .entry_errors
            .entry(dir.into())
            .or_default()
            .push(message.into());
    }

    pub fn set_rename_error(&self, from: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.rename_errors.insert(
            from.into(),
            (io::ErrorKind::PermissionDenied, message.into()),
        );
    }

    pub fn set_remove_error(&self, path: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.remove_errors.insert(
            path.into(),
            (io::ErrorKind::PermissionDenied, message.into()),
        );
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.nodes.keys().cloned().collect()
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.nodes.contains_key(path.as_ref())
    }

    /// Every call made so far, e.g. `list /root`, `stat /root/link` or
    /// `rename /root/a -> /root/b`.
    pub fn ops(&self) -> Vec<String> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.ops.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<io::Result<FsEntry>>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.ops.push(format!("list {}", dir.display()));

        if let Some((kind, message)) = inner.list_errors.get(dir) {
            return Err(io::Error::new(*kind, message.clone()));
        }

        match inner.nodes.get(dir) {
            Some(EntryKind::Directory) => {}
            Some(_) if inner.dir_targets.contains(dir) => {}
            Some(_) => return Err(io::Error::other(format!("not a directory: {}", dir.display()))),
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no such directory: {}", dir.display()),
                ));
            }
        }

        let mut entries: Vec<io::Result<FsEntry>> = inner
            .nodes
            .iter()
            .filter(|(path, _)| path.parent() == Some(dir))
            .filter_map(|(path, kind)| {
                path.file_name().map(|name| {
                    Ok(FsEntry {
                        name: name.to_os_string(),
                        kind: *kind,
                    })
                })
            })
            .collect();
        if let Some(messages) = inner.entry_errors.get(dir) {
            entries.extend(messages.iter().map(|message| Err(io::Error::other(message.clone()))));
        }
        Ok(entries)
    }

    async fn is_dir(&self, path: &Path) -> io::Result<bool> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.ops.push(format!("stat {}", path.display()));

        match inner.nodes.get(path) {
            Some(EntryKind::Directory) => Ok(true),
            Some(_) => Ok(inner.dir_targets.contains(path)),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such entry: {}", path.display()),
            )),
        }
    }

    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .ops
            .push(format!("rename {} -> {}", from.display(), to.display()));

        if let Some((kind, message)) = inner.rename_errors.get(from) {
            return Err(io::Error::new(*kind, message.clone()));
        }
        if !inner.nodes.contains_key(from) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such entry: {}", from.display()),
            ));
        }
        if inner.nodes.contains_key(to) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("destination exists: {}", to.display()),
            ));
        }

        let moved: Vec<PathBuf> = inner
            .nodes
            .keys()
            .filter(|path| path.starts_with(from))
            .cloned()
            .collect();
        for old in moved {
            if let Some(kind) = inner.nodes.remove(&old) {
                let suffix = old.strip_prefix(from).unwrap_or(Path::new(""));
                let new = if suffix.as_os_str().is_empty() {
                    to.to_path_buf()
                } else {
                    to.join(suffix)
                };
                if inner.dir_targets.remove(&old) {
                    inner.dir_targets.insert(new.clone());
                }
                inner.nodes.insert(new, kind);
            }
        }
        Ok(())
    }

    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.ops.push(format!("remove {}", path.display()));

        if let Some((kind, message)) = inner.remove_errors.get(path) {
            return Err(io::Error::new(*kind, message.clone()));
        }

        match inner.nodes.get(path) {
            Some(EntryKind::Directory) => Err(io::Error::other(format!(
                "is a directory: {}",
                path.display()
            ))),
            Some(_) => {
                inner.nodes.remove(path);
                Ok(())
            }
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such entry: {}", path.display()),
            )),
        }
    }
}
