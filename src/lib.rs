//! Sprout - draws a directory hierarchy as an indented tree

pub mod error;
pub mod output;
pub mod platform;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::TreeError;
pub use output::{GlyphSet, OutputConfig, Sink, TreeRenderer};
pub use platform::{NativePlatform, Platform};
pub use tree::{Entry, TreeOutput, TreeSummary, TreeWalker, WalkerConfig};
