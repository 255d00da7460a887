// ============================================================
// Layer 4 — Per-Subject Train/Test Splitter
// ============================================================
// Decides, without touching the disk, which file goes where.
//
// For every subject:
//   1. sort its filenames (plain string order)
//   2. the first `train_count` go to train
//   3. the rest go to test
//
// No shuffling: the same input always yields the same plan,
// which is what makes re-running a split idempotent.
//
// Subjects with fewer than `train_count` files are not an
// error; they simply contribute nothing to test.
//
// Reference: Rust Book §8 (Vectors)

use std::{ffi::OsString, num::NonZeroUsize};

use crate::domain::error::PartitionError;
use crate::domain::subject::SubjectGroups;
use crate::domain::traits::SampleSource;

/// Where one subject's files are headed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectSplit {
    pub subject: String,
    pub train: Vec<OsString>,
    pub test: Vec<OsString>,
}

/// The complete assignment of every sample to train or test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitPlan {
    pub subjects: Vec<SubjectSplit>,
}

impl SplitPlan {
    /// Split already-grouped filenames.
    pub fn from_groups(groups: SubjectGroups, train_count: NonZeroUsize) -> Self {
        let subjects = groups
            .into_sorted()
            .map(|(subject, mut files)| {
                // split_off(n) leaves [0..n) in `files` and returns [n..).
                // It panics when n > len, so clamp: a subject with fewer
                // files than train_count sends all of them to train.
                let cut = train_count.get().min(files.len());
                let test = files.split_off(cut);
                SubjectSplit {
                    subject,
                    train: files,
                    test,
                }
            })
            .collect();

        Self { subjects }
    }

    /// List, group and split everything `source` yields.
    pub fn build(
        source: &impl SampleSource,
        train_count: NonZeroUsize,
    ) -> Result<Self, PartitionError> {
        let groups: SubjectGroups = source.list_samples()?.into_iter().collect();
        tracing::debug!(
            "Grouped {} files under {} subjects",
            groups.file_count(),
            groups.subject_count()
        );
        let plan = Self::from_groups(groups, train_count);

        tracing::debug!(
            "Split plan: {} subjects, {} train, {} test",
            plan.subjects.len(),
            plan.train_len(),
            plan.test_len(),
        );
        Ok(plan)
    }

    pub fn train_len(&self) -> usize {
        self.subjects.iter().map(|s| s.train.len()).sum()
    }

    pub fn test_len(&self) -> usize {
        self.subjects.iter().map(|s| s.test.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}
