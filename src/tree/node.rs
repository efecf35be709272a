//! Displayable tree entries

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::rc::Rc;

const TEE: &str = "├── ";
const CORNER: &str = "└── ";
const VERTICAL: &str = "│   ";
const BLANK: &str = "    ";

/// One line of the rendered tree.
///
/// A node points at its rendered parent, so the full ancestor chain is
/// reachable from any node and rendering needs no other context. Nodes are
/// identified by path: two nodes for the same path compare equal.
#[derive(Debug, Clone)]
pub struct Node {
    path: PathBuf,
    parent: Option<Rc<Node>>,
    is_last: bool,
    is_dir: bool,
    match_count: usize,
}

impl Node {
    /// Create the parentless node at the top of a tree.
    pub fn root(path: impl Into<PathBuf>, is_dir: bool) -> Self {
        Self {
            path: path.into(),
            parent: None,
            is_last: false,
            is_dir,
            match_count: 0,
        }
    }

    pub fn child(path: impl Into<PathBuf>, parent: Rc<Node>, is_last: bool, is_dir: bool) -> Self {
        Self {
            path: path.into(),
            parent: Some(parent),
            is_last,
            is_dir,
            match_count: 0,
        }
    }

    pub fn with_match_count(mut self, match_count: usize) -> Self {
        self.match_count = match_count;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parent(&self) -> Option<&Rc<Node>> {
        self.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_last(&self) -> bool {
        self.is_last
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn match_count(&self) -> usize {
        self.match_count
    }

    /// Base name of the entry, with a trailing `/` for directories.
    pub fn display_name(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string());

        if self.is_dir && !name.ends_with('/') {
            format!("{}/", name)
        } else {
            name
        }
    }

    /// Indentation and branch glyph drawn before the name. Empty for the root.
    pub fn prefix(&self) -> String {
        let Some(parent) = &self.parent else {
            return String::new();
        };

        let mut parts = vec![if self.is_last { CORNER } else { TEE }];

        // The root contributes no column of its own.
        let mut ancestor = Some(parent);
        while let Some(node) = ancestor.filter(|n| !n.is_root()) {
            parts.push(if node.is_last { BLANK } else { VERTICAL });
            ancestor = node.parent.as_ref();
        }

        parts.into_iter().rev().collect()
    }

    /// The `(N)` match count shown after a file name, if any.
    pub fn annotation(&self) -> Option<String> {
        if self.is_root() || self.is_dir || self.match_count == 0 {
            return None;
        }
        Some(format!("({})", self.match_count))
    }

    /// Full display line for this node.
    pub fn render(&self) -> String {
        if self.is_root() {
            return self.display_name();
        }

        let mut line = self.prefix();
        line.push_str(&self.display_name());
        if let Some(annotation) = self.annotation() {
            line.push(' ');
            line.push_str(&annotation);
        }
        line
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}
