//! Tree renderer
//!
//! `TreeRenderer` is the formatting state machine behind the walker. It keeps
//! the indentation stack, picks branch glyphs and writes styled lines to any
//! `WriteColor` sink. Whether colour escapes are emitted is decided by the
//! sink, so the renderer never consults global state.

use std::io;
use std::path::Path;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::tree::{Entry, TreeOutput, TreeSummary};

use super::config::OutputConfig;
use super::format::{entry_label, metadata_block};

/// How a label is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStyle {
    Directory,
    Hidden,
    Executable,
    Plain,
}

impl EntryStyle {
    /// Directory wins over hidden, hidden over executable.
    pub fn of(entry: &Entry) -> Self {
        if entry.is_dir {
            Self::Directory
        } else if entry.hidden {
            Self::Hidden
        } else if entry.executable {
            Self::Executable
        } else {
            Self::Plain
        }
    }

    pub fn color_spec(&self) -> Option<ColorSpec> {
        let mut spec = ColorSpec::new();
        match self {
            Self::Directory => spec.set_fg(Some(Color::Blue)).set_bold(true),
            Self::Hidden => spec.set_fg(Some(Color::Cyan)).set_intense(true),
            Self::Executable => spec.set_fg(Some(Color::Magenta)),
            Self::Plain => return None,
        };
        Some(spec)
    }
}

fn error_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Red));
    spec
}

pub struct TreeRenderer<W: WriteColor> {
    out: W,
    config: OutputConfig,
    indents: Vec<String>,
}

impl<W: WriteColor> TreeRenderer<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self {
            out,
            config,
            indents: Vec::new(),
        }
    }

    /// Number of indentation levels currently pushed.
    pub fn depth(&self) -> usize {
        self.indents.len()
    }

    /// The concatenated indentation prefix for the current depth.
    pub fn prefix(&self) -> String {
        self.indents.concat()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn push_indent(&mut self, is_last: bool) {
        self.indents.push(self.config.glyphs.indent(is_last));
    }

    pub fn pop_indent(&mut self) {
        self.indents.pop();
    }

    fn write_prefix(&mut self) -> io::Result<()> {
        for indent in &self.indents {
            write!(self.out, "{}", indent)?;
        }
        Ok(())
    }

    fn write_styled(&mut self, text: &str, spec: Option<&ColorSpec>) -> io::Result<()> {
        match spec {
            Some(spec) => {
                self.out.set_color(spec)?;
                write!(self.out, "{}", text)?;
                self.out.reset()
            }
            None => write!(self.out, "{}", text),
        }
    }

    /// Write one entry line: prefix, branch glyph, metadata, styled label.
    pub fn print_entry(
        &mut self,
        metadata: &str,
        label: &str,
        is_last: bool,
        style: EntryStyle,
    ) -> io::Result<()> {
        self.write_prefix()?;
        write!(self.out, "{} {}", self.config.glyphs.branch(is_last), metadata)?;
        self.write_styled(label, style.color_spec().as_ref())?;
        writeln!(self.out)
    }

    /// Write an error line at the current indentation.
    pub fn print_error(&mut self, message: &str) -> io::Result<()> {
        self.write_prefix()?;
        self.write_styled(message, Some(&error_spec()))?;
        writeln!(self.out)
    }

    pub fn print_root(&mut self, path: &Path) -> io::Result<()> {
        let label = path.to_string_lossy();
        self.write_styled(&label, EntryStyle::Directory.color_spec().as_ref())?;
        writeln!(self.out)
    }

    pub fn print_summary(&mut self, summary: &TreeSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, " {}", summary)?;
        self.out.flush()
    }
}

impl<W: WriteColor> TreeOutput for TreeRenderer<W> {
    fn root(&mut self, path: &Path) -> io::Result<()> {
        self.print_root(path)
    }

    fn entry(&mut self, parent: &Path, entry: &Entry, is_last: bool) -> io::Result<()> {
        let metadata = metadata_block(entry, &self.config);
        let label = entry_label(parent, entry, &self.config);
        self.print_entry(&metadata, &label, is_last, EntryStyle::of(entry))
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        self.print_error(message)
    }

    fn indent(&mut self, is_last: bool) {
        self.push_indent(is_last);
    }

    fn unindent(&mut self) {
        self.pop_indent();
    }

    fn finish(&mut self, summary: &TreeSummary) -> io::Result<()> {
        self.print_summary(summary)
    }
}
