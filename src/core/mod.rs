pub mod rule;
pub mod walk;

pub use rule::{DEFAULT_REPLACEMENT, DEFAULT_TARGET, RenameRule};
pub use walk::{DirectoryFallback, RenameOptions, process};
