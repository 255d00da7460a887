// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and prints results. All the
// splitting work is delegated to Layer 2 (application).
//
// One command is supported:
//   `split` — partitions a directory of per-subject images
//             into train and test directories
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, SplitArgs};

#[derive(Parser, Debug)]
#[command(
    name = "subject-split",
    version,
    about = "Split a directory of per-subject images into train and test sets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Split(args) => run_split(&args),
        }
    }
}

/// Handles the `split` subcommand.
/// Nothing is printed to stdout unless the whole split succeeded.
fn run_split(args: &SplitArgs) -> Result<()> {
    use crate::application::split_use_case::SplitUseCase;

    tracing::info!(
        "Splitting '{}' into '{}' / '{}'",
        args.source_dir.display(),
        args.train_dir.display(),
        args.test_dir.display()
    );

    let report = SplitUseCase::new(args.into()).execute()?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.summary());
    }
    Ok(())
}
