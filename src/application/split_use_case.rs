// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Orchestrates a full split in order:
//
//   Step 1: List sample files         (Layer 4 - data)
//   Step 2: Build the split plan      (Layer 4 - data)
//   Step 3: Create train/test dirs    (Layer 4 - data)
//   Step 4: Copy files                (Layer 4 - data)
//   Step 5: Build the report          (Layer 6 - infra)
//
// With `dry_run` set, steps 3 and 4 are skipped.
//
// The source is listed before anything is created, so a missing
// source directory leaves the filesystem untouched.
//
// Reference: Rust Book §13 (Iterators and Closures)

use std::{num::NonZeroUsize, path::PathBuf};

use anyhow::{Context, Result};

use crate::data::{copier::PlanCopier, loader::ImageDirLoader, splitter::SplitPlan};
use crate::infra::report::SplitReport;

/// Number of files per subject that go to train unless overridden.
pub const DEFAULT_TRAIN_COUNT: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => panic!("train count must be non-zero"),
};

// ─── Split Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct SplitConfig {
    pub source_dir: PathBuf,
    pub train_dir: PathBuf,
    pub test_dir: PathBuf,
    pub train_count: NonZeroUsize,
    /// Sample file extension, with or without the leading dot
    pub extension: String,
    pub dry_run: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("yalefaces"),
            train_dir: PathBuf::from("yalefaces_train"),
            test_dir: PathBuf::from("yalefaces_test"),
            train_count: DEFAULT_TRAIN_COUNT,
            extension: "pgm".to_string(),
            dry_run: false,
        }
    }
}

// ─── SplitUseCase ─────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Run the split end to end and describe what was done.
    pub fn execute(&self) -> Result<SplitReport> {
        let cfg = &self.config;

        // ── Steps 1 + 2: list and plan ────────────────────────────────────────
        // Listing runs before any directory is created, so a missing
        // source fails here with nothing written to disk.
        let loader = ImageDirLoader::new(&cfg.source_dir, &cfg.extension);
        let plan = SplitPlan::build(&loader, cfg.train_count)
            .with_context(|| format!("Cannot plan split of '{}'", cfg.source_dir.display()))?;

        tracing::info!(
            "Planned {} subjects: {} train / {} test (first {} per subject to train)",
            plan.subjects.len(),
            plan.train_len(),
            plan.test_len(),
            cfg.train_count
        );

        if plan.is_empty() {
            tracing::warn!(
                "No '{}' files in '{}'; destinations will stay empty",
                cfg.extension,
                cfg.source_dir.display()
            );
        }

        if cfg.dry_run {
            tracing::info!("Dry run: nothing created or copied");
            return Ok(SplitReport::new(cfg, &plan));
        }

        // ── Steps 3 + 4: create destinations and copy ─────────────────────────
        // Destinations are never cleared: re-running overwrites same-named
        // files and leaves anything else in place.
        let copier = PlanCopier::new(&cfg.source_dir, &cfg.train_dir, &cfg.test_dir);
        copier.prepare().context("Cannot prepare destination directories")?;
        let stats = copier.copy(&plan).context("Split aborted")?;

        tracing::info!("Copied {} train and {} test files", stats.train, stats.test);

        // ── Step 5: report ────────────────────────────────────────────────────
        Ok(SplitReport::new(cfg, &plan))
    }
}
