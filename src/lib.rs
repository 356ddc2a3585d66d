pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod logging;
pub mod models;

pub use crate::core::{DirectoryFallback, RenameOptions, RenameRule, process};
pub use error::{Operation, RenameError};
pub use fs::{FileSystem, RealFileSystem};
pub use models::RenameReport;
