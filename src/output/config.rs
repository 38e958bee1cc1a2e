//! Output configuration types

use super::glyphs::GlyphSet;

/// Configuration for how entry lines are rendered.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    pub glyphs: GlyphSet,
    /// Print the size column
    pub show_size: bool,
    /// Scale sizes to KB/MB/GB/TB/PB. Implies `show_size`.
    pub human_readable: bool,
    /// Label entries with parent path joined to the name
    pub full_path: bool,
    /// Replace non-printable characters in labels with `?`
    pub replace_nonprintable: bool,
}

impl OutputConfig {
    /// Whether the size column is printed at all.
    pub fn size_enabled(&self) -> bool {
        self.show_size || self.human_readable
    }
}
