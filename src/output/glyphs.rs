//! Line-drawing glyph sets

/// Strings used to draw branches and continuation lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    /// Vertical continuation below a non-last sibling
    pub pipe: &'static str,
    /// Branch to the last child of a directory
    pub last: &'static str,
    /// Branch to any other child
    pub item: &'static str,
}

impl GlyphSet {
    pub const ASCII: GlyphSet = GlyphSet {
        pipe: "|",
        last: "`--",
        item: "|--",
    };

    pub const UNICODE: GlyphSet = GlyphSet {
        pipe: "│",
        last: "└──",
        item: "├──",
    };

    pub fn select(ascii: bool) -> Self {
        if ascii { Self::ASCII } else { Self::UNICODE }
    }

    pub fn branch(&self, is_last: bool) -> &'static str {
        if is_last { self.last } else { self.item }
    }

    /// One indentation level below a child. Every level is four columns wide.
    pub fn indent(&self, is_last: bool) -> String {
        if is_last {
            "    ".to_string()
        } else {
            format!("{}   ", self.pipe)
        }
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::UNICODE
    }
}
