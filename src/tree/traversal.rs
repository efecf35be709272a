//! Directory listing shared by PlainWalker and FilteredWalker.
//!
//! Both walkers keep an explicit stack of `Frame`s, one per directory on the
//! current path, instead of recursing. Sibling order and last-sibling flags
//! come from here, so both walkers agree on them.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::vec;

use tracing::{debug, warn};

use super::node::Node;

/// A listed directory entry: a regular file or a real directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub path: PathBuf,
    /// True only for real directories; symlinks are never descended.
    pub is_dir: bool,
}

/// Read a directory's entries sorted by name.
///
/// Only regular files (directly or through a symlink) and real directories
/// are kept. Symlinked directories, broken links, sockets and FIFOs are
/// dropped, so sibling flags and counts only ever see what gets shown.
/// An unreadable directory is logged and treated as empty.
pub(crate) fn read_sorted_entries(path: &Path) -> Vec<Entry> {
    let entries = match fs::read_dir(path) {
        Ok(e) => e,
        Err(err) => {
            warn!("cannot read directory {}: {}", path.display(), err);
            return Vec::new();
        }
    };

    let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|a| a.file_name());

    entries
        .into_iter()
        .filter_map(|entry| {
            let path = entry.path();
            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                Some(Entry { path, is_dir: true })
            } else if path.is_file() {
                Some(Entry {
                    path,
                    is_dir: false,
                })
            } else {
                debug!("skipping non-regular entry {}", path.display());
                None
            }
        })
        .collect()
}

/// An open directory on the walk stack.
pub(crate) struct Frame {
    pub node: Rc<Node>,
    entries: vec::IntoIter<Entry>,
}

impl Frame {
    pub fn open(node: Rc<Node>) -> Self {
        debug!("entering {}", node.path().display());
        let entries = read_sorted_entries(node.path()).into_iter();
        Self { node, entries }
    }

    /// Next child in name order, paired with whether it is the last sibling.
    pub fn next_child(&mut self) -> Option<(Entry, bool)> {
        let entry = self.entries.next()?;
        Some((entry, self.entries.as_slice().is_empty()))
    }
}
