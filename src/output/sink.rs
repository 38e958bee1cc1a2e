//! Output destinations

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use termcolor::{BufferedStandardStream, ColorChoice, ColorSpec, NoColor, WriteColor};

/// Where the rendered tree goes.
pub enum Sink {
    Terminal(BufferedStandardStream),
    /// Files never receive colour escapes.
    File(NoColor<BufWriter<File>>),
}

impl Sink {
    pub fn stdout(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::Terminal(BufferedStandardStream::stdout(choice))
    }

    /// Create or truncate `path` for writing.
    pub fn file(path: &Path) -> io::Result<Self> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let file = options.open(path)?;
        Ok(Self::File(NoColor::new(BufWriter::new(file))))
    }

    /// Open the file at `path` if given, otherwise stdout.
    pub fn open(path: Option<&Path>, use_color: bool) -> io::Result<Self> {
        match path {
            Some(path) => Self::file(path),
            None => Ok(Self::stdout(use_color)),
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Terminal(s) => s.write(buf),
            Self::File(f) => f.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Terminal(s) => s.flush(),
            Self::File(f) => f.flush(),
        }
    }
}

impl WriteColor for Sink {
    fn supports_color(&self) -> bool {
        match self {
            Self::Terminal(s) => s.supports_color(),
            Self::File(f) => f.supports_color(),
        }
    }

    fn set_color(&mut self, spec: &ColorSpec) -> io::Result<()> {
        match self {
            Self::Terminal(s) => s.set_color(spec),
            Self::File(f) => f.set_color(spec),
        }
    }

    fn reset(&mut self) -> io::Result<()> {
        match self {
            Self::Terminal(s) => s.reset(),
            Self::File(f) => f.reset(),
        }
    }
}
