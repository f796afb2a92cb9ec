//! Sprig - a small tree command with sensible recursion defaults

pub mod output;
pub mod tree;

pub use output::{OutputConfig, TreeFormatter};
pub use tree::{Entry, SkipList, Totals, TreeOutput, TreeWalker, WalkerConfig};
