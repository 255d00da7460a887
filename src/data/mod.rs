// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the source directory and the two
// destination directories.
//
// The pipeline flows in this order:
//
//   source directory
//       │
//       ▼
//   ImageDirLoader    → lists "*.pgm" filenames
//       │
//       ▼
//   SplitPlan         → groups by subject, sorts, cuts at K
//       │
//       ▼
//   PlanCopier        → copies into train/ and test/
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Lists sample image files in a directory
pub mod loader;

/// Builds the per-subject train/test assignment
pub mod splitter;

/// Copies planned files into the destination directories
pub mod copier;
