//! TreeWalker - streams entries depth-first without buffering the tree

use std::fs;
use std::io;
use std::path::Path;

use super::config::WalkerConfig;
use super::entry::Entry;
use super::skip::SkipList;

/// Running totals of visited files and folders, combined bottom-up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub files: usize,
    pub folders: usize,
}

/// Callback for streaming output - receives each entry in traversal order,
/// together with the inherited prefix and whether the entry is the last of
/// its siblings.
pub trait TreeOutput {
    fn output_node(&mut self, entry: &Entry, prefix: &str, is_last: bool) -> io::Result<()>;
}

/// Recursive tree walker. Uses O(depth) memory: each call owns its own
/// directory listing and releases it on return.
pub struct TreeWalker {
    config: WalkerConfig,
    skip: SkipList,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            skip: SkipList::default(),
        }
    }

    /// Override the default skip-list.
    pub fn with_skip_list(mut self, skip: SkipList) -> Self {
        self.skip = skip;
        self
    }

    /// Walk the subtree rooted at `root`, streaming every visited entry to
    /// `output`. The root itself is not emitted. An output error aborts the
    /// walk; unreadable directories do not.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> io::Result<Totals> {
        self.crawl(root, 0, "", output)
    }

    fn crawl<O: TreeOutput>(
        &self,
        dir: &Path,
        depth: usize,
        prefix: &str,
        output: &mut O,
    ) -> io::Result<Totals> {
        let mut totals = Totals::default();

        if self.config.max_depth.is_some_and(|max| depth >= max) {
            return Ok(totals);
        }

        let entries = self.list_entries(dir);
        let count = entries.len();

        for (i, entry) in entries.iter().enumerate() {
            let is_last = i + 1 == count;

            output.output_node(entry, prefix, is_last)?;

            if entry.is_dir() {
                // Counted whether or not we descend.
                totals.folders += 1;

                if self.config.dumb_mode || !self.skip.is_skipped(entry.file_name()) {
                    let child_prefix = if is_last {
                        format!("{}    ", prefix)
                    } else {
                        format!("{}│   ", prefix)
                    };
                    let sub = self.crawl(entry.path(), depth + 1, &child_prefix, output)?;
                    totals.files += sub.files;
                    totals.folders += sub.folders;
                }
            } else {
                totals.files += 1;
            }
        }

        Ok(totals)
    }

    /// List, filter, and sort a directory's immediate children.
    ///
    /// An unreadable directory is treated as empty; siblings and ancestors
    /// keep printing. Children whose metadata cannot be read are dropped.
    fn list_entries(&self, dir: &Path) -> Vec<Entry> {
        let reader = match fs::read_dir(dir) {
            Ok(r) => r,
            Err(_) => return Vec::new(),
        };

        let mut entries: Vec<Entry> = reader
            .filter_map(|e| e.ok())
            .filter_map(|e| e.metadata().ok().map(|m| Entry::new(e.path(), m)))
            .collect();

        if self.config.dirs_only {
            entries.retain(|e| e.is_dir());
        }

        // Directories first, then byte-wise by path within each kind.
        entries.sort_by(|a, b| {
            b.is_dir()
                .cmp(&a.is_dir())
                .then_with(|| a.path().as_os_str().cmp(b.path().as_os_str()))
        });

        if self.config.reverse_sort {
            entries.reverse();
        }

        entries
    }
}
