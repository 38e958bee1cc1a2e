//! TreeWalker - recursive descent that drives a `TreeOutput`

use std::fmt;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::TreeError;

use super::config::WalkerConfig;
use super::entry::Entry;
use super::filter::EntryFilter;
use super::fs::{FileSystem, OsFileSystem, PathKind};
use super::utils::{dir_name, sort_entries};

/// Callback for tree output - receives lines in display order.
pub trait TreeOutput {
    fn root(&mut self, path: &Path) -> io::Result<()>;

    fn entry(&mut self, parent: &Path, entry: &Entry, is_last: bool) -> io::Result<()>;

    /// Report a directory that could not be listed.
    fn error(&mut self, message: &str) -> io::Result<()>;

    fn indent(&mut self, is_last: bool);

    fn unindent(&mut self);

    fn finish(&mut self, summary: &TreeSummary) -> io::Result<()>;
}

/// Directory and file totals of one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSummary {
    pub directories: usize,
    pub files: usize,
}

impl fmt::Display for TreeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir_label = if self.directories == 1 {
            "directory"
        } else {
            "directories"
        };
        let file_label = if self.files == 1 { "file" } else { "files" };
        write!(
            f,
            "{} {}, {} {}",
            self.directories, dir_label, self.files, file_label
        )
    }
}

/// Walks a directory tree depth-first and streams it to a `TreeOutput`.
pub struct TreeWalker<F = OsFileSystem> {
    config: WalkerConfig,
    filter: EntryFilter,
    fs: F,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self::with_filesystem(config, OsFileSystem::default())
    }
}

impl<F: FileSystem> TreeWalker<F> {
    pub fn with_filesystem(config: WalkerConfig, fs: F) -> Self {
        let filter = EntryFilter::new(&config);
        Self { config, filter, fs }
    }

    /// Print the tree below `root` and return the totals.
    ///
    /// Problems with the root itself abort before anything is written.
    /// Directories below the root that cannot be listed are reported inline
    /// and skipped.
    pub fn print_tree<O: TreeOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<TreeSummary, TreeError> {
        match self.fs.stat(root) {
            Ok(PathKind::Directory) => {}
            Ok(PathKind::Other) => {
                return Err(TreeError::NotADirectory {
                    path: root.to_path_buf(),
                });
            }
            Err(e) => return Err(TreeError::from_stat(root, e)),
        }

        debug!(root = %root.display(), "walking tree");
        let mut summary = TreeSummary::default();
        output.root(root)?;
        self.descend(root, 0, output, &mut summary)?;
        output.finish(&summary)?;
        debug!(
            directories = summary.directories,
            files = summary.files,
            "walk finished"
        );
        Ok(summary)
    }

    /// Read, filter and sort the children of a directory.
    pub fn read_entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
        let entries = self.fs.list_children(path)?;
        let mut entries = self.filter.apply(&dir_name(path), entries);
        sort_entries(&mut entries);
        Ok(entries)
    }

    fn expands(&self, depth: usize) -> bool {
        self.config.max_depth.is_none_or(|max| depth < max)
    }

    fn descend<O: TreeOutput>(
        &self,
        path: &Path,
        depth: usize,
        output: &mut O,
        summary: &mut TreeSummary,
    ) -> io::Result<()> {
        let entries = match self.read_entries(path) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable directory");
                return output.error(&format!("{}: {}", path.display(), e));
            }
        };

        let last = entries.len().saturating_sub(1);
        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == last;
            output.entry(path, entry, is_last)?;

            if entry.is_dir {
                summary.directories += 1;
                if self.expands(depth) {
                    output.indent(is_last);
                    let child = path.join(&entry.file_name);
                    let result = self.descend(&child, depth + 1, output, summary);
                    output.unindent();
                    result?;
                }
            } else {
                summary.files += 1;
            }
        }
        Ok(())
    }
}
