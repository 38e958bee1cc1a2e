//! Configuration types for the tree walker

/// Configuration for which entries are listed and how deep the walk goes.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// List hidden entries too
    pub include_hidden: bool,
    pub dirs_only: bool,
    /// Glob; matching entries are dropped. Empty disables it.
    pub exclude_pattern: String,
    /// Glob; only matching entries are kept. Empty keeps everything.
    pub include_pattern: String,
    pub ignore_case: bool,
    /// Deepest level that is still expanded. `None` means unbounded.
    pub max_depth: Option<usize>,
    /// Keep every child of a directory whose own name matches the include pattern
    pub match_dirs: bool,
}

impl WalkerConfig {
    /// Translate a CLI-style level where any negative value means unbounded.
    pub fn with_level(mut self, level: i64) -> Self {
        self.max_depth = usize::try_from(level).ok();
        self
    }
}
