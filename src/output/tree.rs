//! Tree formatter - writes one styled line per visited entry

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{Entry, Totals, TreeOutput};

use super::config::OutputConfig;

/// Formatter for console tree output. Implements `TreeOutput` so the walker
/// can stream entries straight to it; also owns the unprefixed root line and
/// the closing summary.
///
/// Generic over the sink so tests can capture output with
/// `termcolor::NoColor<Vec<u8>>`.
pub struct TreeFormatter<W: WriteColor> {
    config: OutputConfig,
    out: W,
}

impl TreeFormatter<StandardStream> {
    /// Formatter writing to stdout, honoring the configured color choice.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            out: StandardStream::stdout(choice),
        }
    }
}

impl<W: WriteColor> TreeFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the start path once, unprefixed, before traversal begins.
    pub fn print_root(&mut self, path: &Path) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        writeln!(self.out, "{}", path.display())?;
        self.out.reset()
    }

    /// Print the closing summary: a blank line, then folder and file counts
    /// with independent singular/plural wording.
    pub fn print_summary(&mut self, totals: &Totals) -> io::Result<()> {
        writeln!(self.out)?;
        if totals.folders == 1 {
            write!(self.out, "1 folder")?;
        } else {
            write!(self.out, "{} folders", totals.folders)?;
        }
        write!(self.out, ", ")?;
        if totals.files == 1 {
            writeln!(self.out, "1 file")
        } else {
            writeln!(self.out, "{} files", totals.files)
        }
    }

    fn display_path(&self, entry: &Entry) -> String {
        if self.config.full_path {
            entry.path().display().to_string()
        } else {
            entry.file_name().to_string_lossy().into_owned()
        }
    }
}

impl<W: WriteColor> TreeOutput for TreeFormatter<W> {
    fn output_node(&mut self, entry: &Entry, prefix: &str, is_last: bool) -> io::Result<()> {
        let connector = if is_last { "└── " } else { "├── " };
        let display = self.display_path(entry);

        write!(self.out, "{}{}", prefix, connector)?;

        if entry.is_dir() {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            writeln!(self.out, "{}", display)?;
            self.out.reset()?;
        } else if entry.is_symlink() {
            // Resolving the target is the one fatal error in the walk.
            let target = fs::read_link(entry.path())?;
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(self.out, "{}", display)?;
            self.out.reset()?;
            write!(self.out, " -> ")?;
            self.out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            writeln!(self.out, "{}", target.display())?;
            self.out.reset()?;
        } else if entry.is_executable() {
            self.out.set_color(ColorSpec::new().set_bold(true))?;
            writeln!(self.out, "{}", display)?;
            self.out.reset()?;
        } else {
            writeln!(self.out, "{}", display)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use termcolor::NoColor;

    fn formatter(config: OutputConfig) -> TreeFormatter<NoColor<Vec<u8>>> {
        TreeFormatter::new(config, NoColor::new(Vec::new()))
    }

    fn rendered(formatter: TreeFormatter<NoColor<Vec<u8>>>) -> String {
        String::from_utf8(formatter.into_inner().into_inner()).unwrap()
    }

    fn entry_for(path: PathBuf) -> Entry {
        let metadata = fs::symlink_metadata(&path).expect("Failed to stat entry");
        Entry::new(path, metadata)
    }

    #[test]
    fn test_plain_file_line() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "").unwrap();

        let mut f = formatter(OutputConfig::default());
        f.output_node(&entry_for(file), "│   ", false).unwrap();
        assert_eq!(rendered(f), "│   ├── notes.txt\n");
    }

    #[test]
    fn test_last_sibling_gets_corner_glyph() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "").unwrap();

        let mut f = formatter(OutputConfig::default());
        f.output_node(&entry_for(file), "", true).unwrap();
        assert_eq!(rendered(f), "└── notes.txt\n");
    }

    #[test]
    fn test_full_path_mode_prints_whole_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "").unwrap();

        let config = OutputConfig {
            full_path: true,
            ..Default::default()
        };
        let mut f = formatter(config);
        f.output_node(&entry_for(file.clone()), "", true).unwrap();
        assert_eq!(rendered(f), format!("└── {}\n", file.display()));
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_line_shows_target() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let target = dir.path().join("real.txt");
        fs::write(&target, "").unwrap();
        let link = dir.path().join("link.txt");
        symlink("real.txt", &link).unwrap();

        let mut f = formatter(OutputConfig::default());
        f.output_node(&entry_for(link), "", true).unwrap();
        assert_eq!(rendered(f), "└── link.txt -> real.txt\n");
    }

    #[test]
    fn test_root_line_is_unprefixed() {
        let mut f = formatter(OutputConfig::default());
        f.print_root(Path::new("/some/dir")).unwrap();
        assert_eq!(rendered(f), "/some/dir\n");
    }

    #[test]
    fn test_summary_plural_wording() {
        let mut f = formatter(OutputConfig::default());
        f.print_summary(&Totals { files: 2, folders: 1 }).unwrap();
        assert_eq!(rendered(f), "\n1 folder, 2 files\n");
    }

    #[test]
    fn test_summary_singular_and_zero() {
        let mut f = formatter(OutputConfig::default());
        f.print_summary(&Totals { files: 1, folders: 0 }).unwrap();
        assert_eq!(rendered(f), "\n0 folders, 1 file\n");
    }
}
