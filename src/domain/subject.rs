// ============================================================
// Layer 3 — Subject Domain Types
// ============================================================
// A "subject" is the person (or other entity) a sample image
// belongs to. The subject is read straight off the filename:
//
//   subject01.happy.pgm   →  subject01
//   subject07.pgm         →  subject07
//
// Filenames stay OsString end to end so a name that is not valid
// UTF-8 is still grouped and copied under its exact bytes; only
// the subject key is derived from the lossy text form.
//
// SubjectGroups collects filenames under their subject key.
// It is a BTreeMap so subjects are always visited in the same
// order, and every group is sorted before it is handed out.
//
// Reference: Rust Book §8 (Collections)

use std::{
    collections::BTreeMap,
    ffi::{OsStr, OsString},
};

/// Return the subject key of a sample filename: everything before
/// the first `.`. A name without a dot is its own key.
pub fn subject_key(file_name: &str) -> &str {
    file_name
        .split_once('.')
        .map_or(file_name, |(subject, _)| subject)
}

/// Subject key of a raw filename. Invalid UTF-8 bytes become U+FFFD
/// in the key; the filename itself is left untouched.
pub fn os_subject_key(file_name: &OsStr) -> String {
    subject_key(&file_name.to_string_lossy()).to_string()
}

/// Filenames grouped by subject key.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubjectGroups {
    groups: BTreeMap<String, Vec<OsString>>,
}

impl SubjectGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `file_name` to the group of its subject.
    pub fn insert(&mut self, file_name: impl Into<OsString>) {
        let file_name = file_name.into();
        let key = os_subject_key(&file_name);
        self.groups.entry(key).or_default().push(file_name);
    }

    /// Number of distinct subjects seen.
    pub fn subject_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of filenames across all subjects.
    pub fn file_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Consume the groups, yielding `(subject, files)` in subject order
    /// with each file list sorted ascending by its bytes.
    ///
    /// The sort is plain string order, not numeric: `subject01.10.pgm`
    /// comes before `subject01.2.pgm`.
    pub fn into_sorted(self) -> impl Iterator<Item = (String, Vec<OsString>)> {
        self.groups.into_iter().map(|(subject, mut files)| {
            files.sort();
            (subject, files)
        })
    }
}

impl<S: Into<OsString>> FromIterator<S> for SubjectGroups {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut groups = Self::new();
        for name in iter {
            groups.insert(name);
        }
        groups
    }
}
