//! FilteredWalker - prunes the tree to files whose content matches a pattern

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{debug, warn};

use crate::search::PatternMatcher;

use super::context::WalkContext;
use super::node::Node;
use super::traversal::Frame;

/// Lazily yields only matching files and the directories leading to them.
///
/// Traversal order and last-sibling flags are the same as `PlainWalker`'s:
/// they are computed over every sibling, matching or not, so a branch glyph
/// never depends on which neighbours happened to match.
///
/// Directories are held back until a file beneath them matches. At that
/// point every directory on the path that has not been shown yet is yielded,
/// outermost first, followed by the file. Each directory is yielded at most
/// once per walk.
pub struct FilteredWalker<'a> {
    root: Option<PathBuf>,
    matcher: &'a PatternMatcher,
    stack: Vec<Frame>,
    ready: VecDeque<Rc<Node>>,
    context: &'a mut WalkContext,
}

impl<'a> FilteredWalker<'a> {
    /// `root` is expected to be an existing, absolute path.
    pub fn new(
        root: impl Into<PathBuf>,
        matcher: &'a PatternMatcher,
        context: &'a mut WalkContext,
    ) -> Self {
        Self {
            root: Some(root.into()),
            matcher,
            stack: Vec::new(),
            ready: VecDeque::new(),
            context,
        }
    }

    fn start(&mut self, root: PathBuf) {
        if root.is_dir() {
            let node = Rc::new(Node::root(root, true));
            self.context.visibility.register(&node);
            self.stack.push(Frame::open(node));
            return;
        }

        // A file root is the only candidate.
        let count = self.scan_file(&root);
        if count > 0 {
            self.context.record_file();
            self.ready
                .push_back(Rc::new(Node::root(root, false).with_match_count(count)));
        }
    }

    /// Queue every directory on the current path that has not been shown yet.
    fn reveal_ancestors(&mut self) {
        for frame in &self.stack {
            if self.context.visibility.mark_emitted(&frame.node) {
                if !frame.node.is_root() {
                    self.context.record_directory();
                }
                self.ready.push_back(Rc::clone(&frame.node));
            }
        }
    }

    fn scan_file(&self, path: &Path) -> usize {
        if !path.is_file() {
            debug!("skipping non-regular entry {}", path.display());
            return 0;
        }

        match self.matcher.count_in_file(path) {
            Ok(count) => count,
            Err(err) => {
                warn!("cannot read {}: {}", path.display(), err);
                0
            }
        }
    }
}

impl Iterator for FilteredWalker<'_> {
    type Item = Rc<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.ready.pop_front() {
                return Some(node);
            }

            if let Some(root) = self.root.take() {
                self.start(root);
                continue;
            }

            let frame = self.stack.last_mut()?;
            let Some((entry, is_last)) = frame.next_child() else {
                if let Some(done) = self.stack.pop() {
                    self.context.visibility.forget(&done.node);
                }
                continue;
            };
            let parent = Rc::clone(&frame.node);

            if entry.is_dir {
                let node = Rc::new(Node::child(entry.path, parent, is_last, true));
                self.context.visibility.register(&node);
                self.stack.push(Frame::open(node));
                continue;
            }

            let count = self.scan_file(&entry.path);
            if count == 0 {
                continue;
            }

            self.reveal_ancestors();
            self.context.record_file();
            let node = Node::child(entry.path, parent, is_last, false).with_match_count(count);
            self.ready.push_back(Rc::new(node));
        }
    }
}
