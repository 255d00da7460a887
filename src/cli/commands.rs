// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the `split` subcommand and its flags. Every default
// reproduces the classic Yale faces layout:
//
//   yalefaces/        → yalefaces_train/  (first 5 per subject)
//                     → yalefaces_test/   (the rest)
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Args, Subcommand};

use crate::application::split_use_case::SplitConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy each subject's first N files into the train directory
    /// and the rest into the test directory
    Split(SplitArgs),
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Directory holding the per-subject image files
    #[arg(long, default_value = "yalefaces")]
    pub source_dir: PathBuf,

    /// Destination for training files (created if missing)
    #[arg(long, default_value = "yalefaces_train")]
    pub train_dir: PathBuf,

    /// Destination for test files (created if missing)
    #[arg(long, default_value = "yalefaces_test")]
    pub test_dir: PathBuf,

    /// How many files of each subject go to train, taken in
    /// ascending filename order
    #[arg(long, default_value = "5")]
    pub train_count: NonZeroUsize,

    /// Extension of the sample files; other files are ignored
    #[arg(long, default_value = "pgm")]
    pub extension: String,

    /// Show what would be copied without touching the disk
    #[arg(long)]
    pub dry_run: bool,

    /// Print the split report as JSON
    #[arg(long)]
    pub json: bool,
}

/// The application layer never sees clap types.
impl From<&SplitArgs> for SplitConfig {
    fn from(a: &SplitArgs) -> Self {
        SplitConfig {
            source_dir: a.source_dir.clone(),
            train_dir: a.train_dir.clone(),
            test_dir: a.test_dir.clone(),
            train_count: a.train_count,
            extension: a.extension.clone(),
            dry_run: a.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<SplitArgs, clap::Error> {
        let cli = Cli::try_parse_from(std::iter::once("subject-split").chain(args.iter().copied()))?;
        match cli.command {
            Commands::Split(a) => Ok(a),
        }
    }

    #[test]
    fn test_defaults_reproduce_reference_layout() {
        let config = SplitConfig::from(&parse(&["split"]).unwrap());
        let default = SplitConfig::default();

        assert_eq!(config.source_dir, default.source_dir);
        assert_eq!(config.train_dir, default.train_dir);
        assert_eq!(config.test_dir, default.test_dir);
        assert_eq!(config.train_count, default.train_count);
        assert_eq!(config.extension, default.extension);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_overrides() {
        let args = parse(&[
            "split",
            "--source-dir",
            "faces",
            "--train-count",
            "3",
            "--extension",
            ".png",
            "--dry-run",
            "--json",
        ])
        .unwrap();

        assert_eq!(args.source_dir, PathBuf::from("faces"));
        assert_eq!(args.train_count.get(), 3);
        assert_eq!(args.extension, ".png");
        assert!(args.dry_run);
        assert!(args.json);
    }

    #[test]
    fn test_zero_train_count_rejected() {
        assert!(parse(&["split", "--train-count", "0"]).is_err());
    }
}
