//! Tree rendering
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `glyphs` - ASCII and Unicode line-drawing sets
//! - `format` - Size column and label formatting
//! - `renderer` - Indentation state machine writing styled lines
//! - `sink` - Terminal or file destinations

mod config;
mod format;
mod glyphs;
mod renderer;
mod sink;

pub use config::OutputConfig;
pub use format::{
    BYTES_WIDTH, HUMAN_WIDTH, byte_size, entry_label, format_size, human_size, is_printable,
    metadata_block, replace_nonprintable,
};
pub use glyphs::GlyphSet;
pub use renderer::{EntryStyle, TreeRenderer};
pub use sink::Sink;
