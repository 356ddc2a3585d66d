mod entry;
mod report;

pub use entry::{EntryKind, FsEntry};
pub use report::RenameReport;
