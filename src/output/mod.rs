//! Tree formatting and display
//!
//! Walkers hand nodes to a `TreeOutput` one at a time; nothing is buffered
//! between nodes. `StreamingFormatter` is the console implementation.

mod config;
mod streaming;

use std::io;

use crate::tree::{Node, TreeSummary};

pub use config::OutputConfig;
pub use streaming::StreamingFormatter;

/// Sink for rendered tree output.
pub trait TreeOutput {
    fn output_node(&mut self, node: &Node) -> io::Result<()>;

    fn finish(&mut self, summary: &TreeSummary) -> io::Result<()>;
}
