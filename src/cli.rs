use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::core::DirectoryFallback;

#[derive(Parser, Debug)]
#[command(name = "renamer")]
#[command(
    about = "Rename every file and folder whose name contains \"vscode\" to use \"zycode\" instead",
    long_about = None
)]
pub struct Cli {
    /// Root directory to process (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// What to do when a directory cannot be renamed
    #[arg(long, value_enum, default_value_t = DirectoryFallback::Skip)]
    pub directory_fallback: DirectoryFallback,

    /// Increase log verbosity (-v renames, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
