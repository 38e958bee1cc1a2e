//! Directory entry snapshots

use std::ffi::OsString;

/// A single child of a listed directory.
///
/// Taken once per listing and never refreshed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Display name, lossily decoded. Used for labels and matching.
    pub name: String,
    /// The name as stored on disk. Child paths are built from this.
    pub file_name: OsString,
    pub size: u64,
    pub is_dir: bool,
    pub hidden: bool,
    pub executable: bool,
}

impl Entry {
    /// A plain, visible, non-executable file.
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        Self {
            file_name: OsString::from(&name),
            name,
            size,
            is_dir: false,
            hidden: false,
            executable: false,
        }
    }

    /// A visible directory.
    pub fn dir(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            file_name: OsString::from(&name),
            name,
            size: 0,
            is_dir: true,
            hidden: false,
            executable: false,
        }
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn executable(mut self, executable: bool) -> Self {
        self.executable = executable;
        self
    }
}
