//! Filesystem access used by the walker

use std::ffi::OsString;
use std::fs::Metadata;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::platform::{NativePlatform, Platform};

use super::entry::Entry;

/// What a stat of the root path found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Directory,
    Other,
}

/// The two filesystem queries the walker needs.
pub trait FileSystem {
    /// Stat a path, following symlinks.
    fn stat(&self, path: &Path) -> io::Result<PathKind>;

    /// Read every child of a directory into memory.
    fn list_children(&self, path: &Path) -> io::Result<Vec<Entry>>;
}

/// The real filesystem, classified by a `Platform`.
#[derive(Debug, Clone, Default)]
pub struct OsFileSystem<P = NativePlatform> {
    platform: P,
}

impl<P: Platform> OsFileSystem<P> {
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    /// Snapshot one listed child. A child that vanished after the listing
    /// yields `None`.
    fn snapshot(
        &self,
        file_name: OsString,
        meta: io::Result<Metadata>,
    ) -> io::Result<Option<Entry>> {
        let meta = match meta {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(name = ?file_name, "skipping vanished entry");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        let name = file_name.to_string_lossy().into_owned();
        Ok(Some(Entry {
            size: meta.len(),
            is_dir: meta.is_dir(),
            hidden: self.platform.is_hidden(&name, &meta),
            executable: self.platform.is_executable(&name, &meta),
            name,
            file_name,
        }))
    }
}

impl<P: Platform> FileSystem for OsFileSystem<P> {
    fn stat(&self, path: &Path) -> io::Result<PathKind> {
        let meta = std::fs::metadata(path)?;
        Ok(if meta.is_dir() {
            PathKind::Directory
        } else {
            PathKind::Other
        })
    }

    fn list_children(&self, path: &Path) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();
        for dir_entry in std::fs::read_dir(path)? {
            let dir_entry = dir_entry?;
            // DirEntry::metadata does not traverse symlinks
            if let Some(entry) = self.snapshot(dir_entry.file_name(), dir_entry.metadata())? {
                entries.push(entry);
            }
        }
        Ok(entries)
    }
}
