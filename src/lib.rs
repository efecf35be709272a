//! Heatfile - a directory tree that counts where a search string lives

pub mod error;
pub mod output;
pub mod render;
pub mod search;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{OutputConfig, StreamingFormatter, TreeOutput};
pub use render::{build_tree, build_tree_with, render_tree, validate_inputs};
pub use search::PatternMatcher;
pub use tree::{FilteredWalker, Node, PlainWalker, TreeSummary, WalkContext};
