//! CLI entry point for sprig

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use sprig::{OutputConfig, TreeFormatter, TreeWalker, WalkerConfig};

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
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sprig")]
#[command(about = "An opinionated tree command, just the way I like it")]
#[command(version)]
struct Args {
    /// Directory to display (defaults to the current directory)
    path: Option<PathBuf>,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Descend only N levels deep (0 = unlimited)
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Sort in reverse alphabetic order
    #[arg(short = 'r', long = "reverse")]
    reverse: bool,

    /// Print a summary of folders and files at the end
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Print the full path of each entry
    #[arg(short = 'f', long = "full-path")]
    full_path: bool,

    /// Dumb mode: recurse into every directory, skip-list included
    #[arg(short = 'D', long = "dumb")]
    dumb: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Strip trailing path separators, keeping a bare root intact.
fn strip_trailing_separators(path: &str) -> &str {
    let trimmed = path.trim_end_matches(std::path::MAIN_SEPARATOR);
    if trimmed.is_empty() { path } else { trimmed }
}

/// Resolve the start path: the positional argument if given, otherwise the
/// current directory. Failing to determine the current directory is fatal.
fn resolve_root(arg: Option<PathBuf>) -> PathBuf {
    let path = match arg {
        Some(p) => p,
        None => std::env::current_dir().unwrap_or_else(|e| {
            eprintln!("sprig: cannot determine current directory: {}", e);
            process::exit(1);
        }),
    };
    PathBuf::from(strip_trailing_separators(&path.to_string_lossy()))
}

fn main() {
    let args = Args::parse();

    let root = resolve_root(args.path);

    let walker_config = WalkerConfig {
        max_depth: args.level.filter(|&n| n > 0),
        dirs_only: args.dirs_only,
        reverse_sort: args.reverse,
        dumb_mode: args.dumb,
    };

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        full_path: args.full_path,
    };

    let walker = TreeWalker::new(walker_config);
    let mut formatter = TreeFormatter::stdout(output_config);

    if let Err(e) = formatter.print_root(&root) {
        eprintln!("sprig: error writing output: {}", e);
        process::exit(1);
    }

    let totals = match walker.walk(&root, &mut formatter) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("sprig: {}", e);
            process::exit(1);
        }
    };

    if args.summary {
        if let Err(e) = formatter.print_summary(&totals) {
            eprintln!("sprig: error writing output: {}", e);
            process::exit(1);
        }
    }
}
