// ============================================================
// Layer 4 — Image Directory Loader
// ============================================================
// Lists the sample images in a source directory.
//
// Only the directory listing is read; file contents are never
// opened. An entry is kept when its name ends with the configured
// suffix (e.g. ".pgm"), compared on the raw name bytes. Names do
// not have to be valid UTF-8.
//
// The entry type is not checked here. A matching directory or a
// dangling symlink is listed like any other sample and fails later
// at copy time, so no matching entry is ever dropped quietly.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use std::{ffi::OsString, fs, io, path::PathBuf};

use crate::domain::error::PartitionError;
use crate::domain::traits::SampleSource;

/// Lists the `*.<suffix>` files in one directory.
/// Implements the SampleSource trait from Layer 3.
pub struct ImageDirLoader {
    dir: PathBuf,
    suffix: String,
}

impl ImageDirLoader {
    /// `extension` may be given with or without its leading dot:
    /// "pgm" and ".pgm" both match `subject01.pgm`.
    pub fn new(dir: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            dir: dir.into(),
            suffix: normalize_suffix(extension),
        }
    }
}

impl SampleSource for ImageDirLoader {
    fn list_samples(&self) -> Result<Vec<OsString>, PartitionError> {
        let read_err = |source: io::Error| PartitionError::ReadSource {
            path: self.dir.clone(),
            source,
        };

        // A missing source is its own error kind; anything else that
        // stops the listing (not a directory, permissions) is ReadSource.
        let entries = fs::read_dir(&self.dir).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                PartitionError::SourceNotFound(self.dir.clone())
            } else {
                read_err(e)
            }
        })?;

        let mut names = Vec::new();
        let mut ignored = 0usize;

        for entry in entries {
            let entry = entry.map_err(read_err)?;

            let name = entry.file_name();

            // The suffix is plain text, so a byte comparison matches the
            // same names as a string comparison would, plus non UTF-8 ones.
            if !name.as_encoded_bytes().ends_with(self.suffix.as_bytes()) {
                ignored += 1;
                continue;
            }

            names.push(name);
        }

        tracing::info!(
            "Found {} '{}' files in '{}' ({} other entries ignored)",
            names.len(),
            self.suffix,
            self.dir.display(),
            ignored
        );
        Ok(names)
    }
}

fn normalize_suffix(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    }
}
