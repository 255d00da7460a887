// ============================================================
// Layer 3 — Split Errors
// ============================================================
// Every failure a split run can hit is a filesystem failure:
//
//   SourceNotFound — the source directory is missing
//   ReadSource     — the source exists but cannot be listed
//   CreateDir      — a destination directory cannot be created
//   Copy           — a single file copy failed
//
// None of them are recovered from. The first one aborts the run
// and destinations stay in whatever state they reached.
//
// Reference: Rust Book §9 (Error Handling), thiserror docs

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PartitionError {
    #[error("source directory '{}' does not exist", .0.display())]
    SourceNotFound(PathBuf),

    #[error("cannot read source directory '{}'", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create directory '{}'", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot copy '{}' to '{}'", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}
