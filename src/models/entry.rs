use std::ffi::OsString;

/// `Other` also covers entries whose type could not be read; the walker asks
/// the filesystem whether those lead to a directory.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Other,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub name: OsString,
    pub kind: EntryKind,
}
