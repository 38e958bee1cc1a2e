//! Shared utility functions for tree walking

use std::cmp::Ordering;
use std::path::Path;

use super::entry::Entry;

/// Sort a filtered listing: directories first, then case-insensitive by name.
/// Entries with equal keys keep their listing order.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(compare_entries);
}

fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

/// The name used for a directory in directory-name matching.
/// Falls back to the whole path for paths like `.` or `/`.
pub fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
