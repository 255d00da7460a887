// ============================================================
// Layer 4 — Plan Copier
// ============================================================
// Carries out a SplitPlan on disk:
//
//   source_dir/<name>  ──copy──▶  train_dir/<name>
//                       └─copy──▶  test_dir/<name>
//
// Files are copied, never moved, and keep their names.
// An existing file of the same name is overwritten. Nothing
// already present in the destinations is ever deleted.
//
// The first failure aborts; earlier copies stay where they are.
//
// Reference: Rust Book §12 (I/O and File Handling)

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use crate::data::splitter::SplitPlan;
use crate::domain::error::PartitionError;

/// Counts of files written by one copy pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub train: usize,
    pub test: usize,
}

pub struct PlanCopier {
    source_dir: PathBuf,
    train_dir: PathBuf,
    test_dir: PathBuf,
}

impl PlanCopier {
    pub fn new(
        source_dir: impl Into<PathBuf>,
        train_dir: impl Into<PathBuf>,
        test_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            train_dir: train_dir.into(),
            test_dir: test_dir.into(),
        }
    }

    /// Create both destination directories (and parents) if missing.
    /// Existing directories are left as they are.
    pub fn prepare(&self) -> Result<(), PartitionError> {
        for dir in [&self.train_dir, &self.test_dir] {
            fs::create_dir_all(dir).map_err(|source| PartitionError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Copy every file in `plan` to its destination.
    pub fn copy(&self, plan: &SplitPlan) -> Result<CopyStats, PartitionError> {
        let mut stats = CopyStats::default();

        for split in &plan.subjects {
            for name in &split.train {
                self.copy_one(name, &self.train_dir)?;
                stats.train += 1;
            }
            for name in &split.test {
                self.copy_one(name, &self.test_dir)?;
                stats.test += 1;
            }
            tracing::info!(
                "{}: {} train, {} test",
                split.subject,
                split.train.len(),
                split.test.len()
            );
        }

        Ok(stats)
    }

    fn copy_one(&self, name: &OsStr, dest_dir: &Path) -> Result<(), PartitionError> {
        let from = self.source_dir.join(name);
        let to = dest_dir.join(name);

        // fs::copy truncates and overwrites an existing `to`. It refuses a
        // source that is a directory or a dangling symlink, which is how
        // such entries surface as errors instead of being skipped.
        fs::copy(&from, &to).map_err(|source| PartitionError::Copy {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;

        tracing::debug!("Copied '{}' -> '{}'", from.display(), to.display());
        Ok(())
    }
}
