//! Output formatting for tree listings
//!
//! `TreeFormatter` turns the walker's entry stream into styled console
//! lines: directories bold blue, symlinks with their resolved target,
//! executables bold, everything else plain.

mod config;
mod tree;

pub use config::OutputConfig;
pub use tree::TreeFormatter;
