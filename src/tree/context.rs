//! Per-walk mutable state: shown counters and ancestor visibility

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use super::node::Node;

/// Directories and files shown by one walk. The root directory is not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSummary {
    pub directories: usize,
    pub files: usize,
}

impl fmt::Display for TreeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} directories, {} files", self.directories, self.files)
    }
}

/// Tracks which directories have already been emitted, keyed by path.
///
/// Directories are registered when the walk enters them and forgotten when
/// it leaves, so the map only ever holds the current ancestor chain.
#[derive(Debug, Default)]
pub struct AncestorVisibility {
    emitted: HashMap<PathBuf, bool>,
}

impl AncestorVisibility {
    pub fn register(&mut self, node: &Node) {
        self.emitted.entry(node.path().to_path_buf()).or_insert(false);
    }

    #[cfg(test)]
    pub(crate) fn is_emitted(&self, node: &Node) -> bool {
        self.emitted.get(node.path()).copied().unwrap_or(false)
    }

    /// Mark a directory as emitted. Returns `true` only the first time.
    pub fn mark_emitted(&mut self, node: &Node) -> bool {
        let emitted = self.emitted.entry(node.path().to_path_buf()).or_insert(false);
        !std::mem::replace(emitted, true)
    }

    pub fn forget(&mut self, node: &Node) {
        self.emitted.remove(node.path());
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.emitted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }
}

/// State shared by a walker and its caller for the duration of one tree.
///
/// Create a fresh context for every tree; nothing here is meant to outlive
/// a single walk.
#[derive(Debug, Default)]
pub struct WalkContext {
    summary: TreeSummary,
    pub(crate) visibility: AncestorVisibility,
}

impl WalkContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> TreeSummary {
        self.summary
    }

    pub fn visibility(&self) -> &AncestorVisibility {
        &self.visibility
    }

    pub(crate) fn record_directory(&mut self) {
        self.summary.directories += 1;
    }

    pub(crate) fn record_file(&mut self) {
        self.summary.files += 1;
    }
}
