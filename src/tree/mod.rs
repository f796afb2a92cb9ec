//! Directory tree walking logic
//!
//! `TreeWalker` crawls a directory subtree depth-first, applying the sort,
//! filter, and skip policy, and streams each visited entry to a `TreeOutput`
//! callback in traversal order while accumulating file/folder totals.

mod config;
mod entry;
mod skip;
mod walker;

pub use config::WalkerConfig;
pub use entry::Entry;
pub use skip::{DEFAULT_SKIP_DIRS, SkipList};
pub use walker::{Totals, TreeOutput, TreeWalker};
