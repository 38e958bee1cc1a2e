//! Per-OS hidden and executable predicates
//!
//! The walker never branches on the target OS itself. It receives a
//! `Platform` and asks it about each entry while the listing snapshot is
//! taken. `NativePlatform` is the implementation picked for the build target.

use std::fs::Metadata;

/// Hidden/executable classification of directory entries.
pub trait Platform {
    /// Whether an entry follows the platform's hidden-file convention.
    fn is_hidden(&self, name: &str, meta: &Metadata) -> bool;

    /// Whether an entry should be styled as an executable.
    fn is_executable(&self, name: &str, meta: &Metadata) -> bool;
}

/// Dot-prefixed names are hidden; any execute bit marks a regular file executable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Posix;

impl Platform for Posix {
    fn is_hidden(&self, name: &str, _meta: &Metadata) -> bool {
        name.starts_with('.')
    }

    #[cfg(unix)]
    fn is_executable(&self, _name: &str, meta: &Metadata) -> bool {
        use std::os::unix::fs::PermissionsExt;

        meta.is_file() && meta.permissions().mode() & 0o111 != 0
    }

    #[cfg(not(unix))]
    fn is_executable(&self, _name: &str, _meta: &Metadata) -> bool {
        false
    }
}

/// Hidden attribute bit and `.exe` extension.
#[cfg(windows)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Windows;

#[cfg(windows)]
impl Platform for Windows {
    fn is_hidden(&self, _name: &str, meta: &Metadata) -> bool {
        use std::os::windows::fs::MetadataExt;

        const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
        meta.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0
    }

    fn is_executable(&self, name: &str, _meta: &Metadata) -> bool {
        std::path::Path::new(name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("exe"))
    }
}

#[cfg(windows)]
pub type NativePlatform = Windows;

#[cfg(not(windows))]
pub type NativePlatform = Posix;
