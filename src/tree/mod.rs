//! Directory tree walking logic
//!
//! Two walkers share one node type:
//!
//! - `PlainWalker`: yields every file and directory under a root
//! - `FilteredWalker`: yields only files whose content matches a pattern,
//!   plus the directories needed to reach them
//!
//! Both are lazy, single-pass iterators using O(depth) memory. They borrow a
//! `WalkContext` that collects the shown counts for the summary line.

mod context;
mod filtered;
mod node;
mod traversal;
mod walker;

pub use context::{AncestorVisibility, TreeSummary, WalkContext};
pub use filtered::FilteredWalker;
pub use node::Node;
pub use walker::PlainWalker;
