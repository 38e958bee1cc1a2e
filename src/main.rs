//! CLI entry point for sprout

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use sprout::{GlyphSet, OutputConfig, Sink, TreeRenderer, TreeWalker, WalkerConfig};
use tracing_subscriber::EnvFilter;

/// Exit code for bad arguments or an output file that cannot be opened.
const EXIT_USAGE: i32 = 1;
/// Exit code for a failed walk.
const EXIT_TREE: i32 = 2;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sprout")]
#[command(about = "List the contents of a directory as a tree")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    // Listing options
    /// List all files, including hidden ones
    #[arg(short, long)]
    all: bool,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Do not list entries that match the pattern
    #[arg(short = 'I', long = "exclude-pattern", value_name = "PATTERN", default_value = "")]
    exclude_pattern: String,

    /// List only entries that match the pattern
    #[arg(short = 'P', long = "include-pattern", value_name = "PATTERN", default_value = "")]
    include_pattern: String,

    /// Ignore case when pattern matching
    #[arg(long = "ignore-case")]
    ignore_case: bool,

    /// Descend only N levels deep (negative means unlimited)
    #[arg(short = 'L', long = "level", allow_negative_numbers = true)]
    level: Option<i64>,

    /// Also match directory names against the include pattern; every entry
    /// of a matching directory is listed
    #[arg(long = "matchdirs")]
    match_dirs: bool,

    /// Print the full path prefix for each entry
    #[arg(short = 'f', long = "fullpath")]
    full_path: bool,

    // File options
    /// Print sizes in human readable units (implies --size)
    #[arg(short = 'H', long = "human-readable")]
    human_readable: bool,

    /// Print the size in bytes of each entry
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Print non-printable characters as '?'
    #[arg(short = 'q', long = "replace-nonprintable")]
    replace_nonprintable: bool,

    /// Write output to FILE instead of stdout (disables colors)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Use ASCII line-drawing characters
    #[arg(short = 'A', long = "ascii")]
    ascii: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Turn colorization off
    #[arg(short = 'n', long = "no-colors")]
    no_colors: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            eprintln!("sprout: failed to parse arguments: {}", e);
            process::exit(EXIT_USAGE);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    init_tracing();

    let walker_config = WalkerConfig {
        include_hidden: args.all,
        dirs_only: args.dirs_only,
        exclude_pattern: args.exclude_pattern.clone(),
        include_pattern: args.include_pattern.clone(),
        ignore_case: args.ignore_case,
        match_dirs: args.match_dirs,
        ..Default::default()
    }
    .with_level(args.level.unwrap_or(-1));

    // A file destination always turns colors off
    let use_color = args.output.is_none()
        && !args.no_colors
        && should_use_color(args.color);

    let output_config = OutputConfig {
        use_color,
        glyphs: GlyphSet::select(args.ascii),
        show_size: args.size,
        human_readable: args.human_readable,
        full_path: args.full_path,
        replace_nonprintable: args.replace_nonprintable,
    };

    let sink = match Sink::open(args.output.as_deref(), output_config.use_color) {
        Ok(sink) => sink,
        Err(e) => {
            eprintln!("sprout: failed to open output file: {}", e);
            process::exit(EXIT_USAGE);
        }
    };

    let walker = TreeWalker::new(walker_config);
    let mut renderer = TreeRenderer::new(sink, output_config);

    if let Err(e) = walker.print_tree(&args.path, &mut renderer) {
        eprintln!("sprout: {}", e);
        process::exit(EXIT_TREE);
    }
}
