//! Streaming output formatter
//!
//! This module provides `StreamingFormatter`, which writes each node as soon
//! as the walker produces it.

use std::io;

use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::tree::{Node, TreeSummary};

use super::TreeOutput;
use super::config::OutputConfig;

/// Writes tree lines to any color-capable writer.
///
/// Branch prefixes are plain, directory names blue and bold, match counts
/// green. With colors disabled the bytes written are exactly `Node::render`
/// followed by a newline.
pub struct StreamingFormatter<W> {
    out: W,
}

impl StreamingFormatter<StandardStream> {
    pub fn stdout(config: &OutputConfig) -> Self {
        Self::new(StandardStream::stdout(config.color_choice()))
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> TreeOutput for StreamingFormatter<W> {
    fn output_node(&mut self, node: &Node) -> io::Result<()> {
        write!(self.out, "{}", node.prefix())?;

        if node.is_dir() {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        }
        write!(self.out, "{}", node.display_name())?;
        self.out.reset()?;

        if let Some(annotation) = node.annotation() {
            write!(self.out, " ")?;
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(self.out, "{}", annotation)?;
            self.out.reset()?;
        }

        writeln!(self.out)
    }

    fn finish(&mut self, summary: &TreeSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", summary)?;
        self.out.flush()
    }
}
