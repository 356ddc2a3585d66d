use clap::Parser;
use std::process::ExitCode;
use tracing::info;

use renamer::cli::Cli;
use renamer::{RealFileSystem, RenameOptions, RenameRule};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = renamer::logging::init_logging(cli.verbose) {
        eprintln!("renamer: {err:#}");
        return ExitCode::from(1);
    }

    let options = RenameOptions {
        rule: RenameRule::default(),
        directory_fallback: cli.directory_fallback,
    };

    match renamer::process(&RealFileSystem, &cli.path, &options).await {
        Ok(report) => {
            info!(
                renamed = report.renamed,
                removed = report.removed,
                failed = report.failures.len(),
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("renamer: {err}");
            ExitCode::from(1)
        }
    }
}
