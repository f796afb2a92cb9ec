//! Configuration types for the tree walker

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Descend at most this many directory levels. `None` means unlimited.
    pub max_depth: Option<usize>,
    pub dirs_only: bool,
    pub reverse_sort: bool,
    /// Recurse into every directory, skip-list included.
    pub dumb_mode: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            dirs_only: false,
            reverse_sort: false,
            dumb_mode: false,
        }
    }
}
