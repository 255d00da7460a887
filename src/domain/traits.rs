// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The split logic only needs a list of candidate filenames.
// Where they come from is hidden behind SampleSource:
//
//   - ImageDirLoader → lists a directory on disk
//   - a plain Vec    → used by the unit tests
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::ffi::OsString;

use crate::domain::error::PartitionError;

// ─── SampleSource ─────────────────────────────────────────────────────────────
/// Anything that can list the sample filenames eligible for a split.
///
/// Implementations return bare filenames (no directory part) that
/// already passed their own suffix filter. Names are raw OsStrings;
/// they need not be valid UTF-8.
pub trait SampleSource {
    fn list_samples(&self) -> Result<Vec<OsString>, PartitionError>;
}

#[cfg(test)]
impl SampleSource for Vec<String> {
    fn list_samples(&self) -> Result<Vec<OsString>, PartitionError> {
        Ok(self.iter().map(OsString::from).collect())
    }
}
