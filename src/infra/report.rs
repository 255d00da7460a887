// ============================================================
// Layer 6 — Split Report
// ============================================================
// A record of what one split run did (or, with --dry-run,
// would do). Printed as a one-line summary by default or as
// JSON with --json:
//
//   {
//     "source_dir": "yalefaces",
//     "train_dir": "yalefaces_train",
//     "test_dir": "yalefaces_test",
//     "train_count": 5,
//     "dry_run": false,
//     "train_files": 75,
//     "test_files": 90,
//     "subjects": [ { "subject": "subject01", "train": 5, "test": 6 }, ... ]
//   }
//
// Reference: serde / serde_json docs

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::application::split_use_case::SplitConfig;
use crate::data::splitter::SplitPlan;

/// Per-subject file counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectSummary {
    pub subject: String,
    pub train: usize,
    pub test: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitReport {
    pub source_dir: PathBuf,
    pub train_dir: PathBuf,
    pub test_dir: PathBuf,
    pub train_count: usize,
    pub dry_run: bool,
    pub train_files: usize,
    pub test_files: usize,
    pub subjects: Vec<SubjectSummary>,
}

impl SplitReport {
    pub fn new(config: &SplitConfig, plan: &SplitPlan) -> Self {
        let subjects = plan
            .subjects
            .iter()
            .map(|s| SubjectSummary {
                subject: s.subject.clone(),
                train: s.train.len(),
                test: s.test.len(),
            })
            .collect();

        Self {
            source_dir: config.source_dir.clone(),
            train_dir: config.train_dir.clone(),
            test_dir: config.test_dir.clone(),
            train_count: config.train_count.get(),
            dry_run: config.dry_run,
            train_files: plan.train_len(),
            test_files: plan.test_len(),
            subjects,
        }
    }

    /// Human-readable one-liner for the terminal.
    pub fn summary(&self) -> String {
        let verb = if self.dry_run { "Would split" } else { "Split" };
        format!(
            "{verb} {} subjects: {} files -> '{}', {} files -> '{}'",
            self.subjects.len(),
            self.train_files,
            self.train_dir.display(),
            self.test_files,
            self.test_dir.display(),
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
