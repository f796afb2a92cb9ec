//! Filesystem entries collected while listing a directory

use std::ffi::OsStr;
use std::fs::Metadata;
use std::path::{Path, PathBuf};

/// One filesystem object encountered during traversal.
///
/// Classification uses the metadata returned by the directory listing, which
/// does not follow symlinks: a symlink to a directory is a symlink here, not
/// a directory.
#[derive(Debug)]
pub struct Entry {
    path: PathBuf,
    metadata: Metadata,
}

impl Entry {
    pub(crate) fn new(path: PathBuf, metadata: Metadata) -> Self {
        Self { path, metadata }
    }

    /// Full path of the entry (start path joined with each listed name).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name of the entry.
    pub fn file_name(&self) -> &OsStr {
        self.path.file_name().unwrap_or_else(|| self.path.as_os_str())
    }

    pub fn is_dir(&self) -> bool {
        self.metadata.is_dir()
    }

    pub fn is_symlink(&self) -> bool {
        self.metadata.file_type().is_symlink()
    }

    /// Any execute permission bit set.
    #[cfg(unix)]
    pub fn is_executable(&self) -> bool {
        use std::os::unix::fs::PermissionsExt;
        self.metadata.permissions().mode() & 0o111 != 0
    }

    #[cfg(not(unix))]
    pub fn is_executable(&self) -> bool {
        false
    }
}
