//! Directory tree walking logic
//!
//! `TreeWalker` lists each directory through a `FileSystem`, runs the
//! listing through the filter pipeline, sorts it, and streams the result to
//! a `TreeOutput` in display order. Only the current listing is held in
//! memory at each level.

mod config;
mod entry;
mod filter;
mod fs;
mod utils;
mod walker;

pub use config::WalkerConfig;
pub use entry::Entry;
pub use filter::{EntryFilter, NamePattern};
pub use fs::{FileSystem, OsFileSystem, PathKind};
pub use utils::{dir_name, sort_entries};
pub use walker::{TreeOutput, TreeSummary, TreeWalker};
