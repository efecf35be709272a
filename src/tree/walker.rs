//! PlainWalker - lists every entry under a root

use std::path::PathBuf;
use std::rc::Rc;

use super::context::WalkContext;
use super::node::Node;
use super::traversal::Frame;

/// Lazily yields one node per filesystem entry, depth-first, in name order.
///
/// The root comes first. Directories are yielded before their contents and
/// counted as they are entered; the root itself is never counted. A root
/// that is a file yields a single node counted as one file.
///
/// The walker is single pass: walking again requires a new walker and a
/// fresh `WalkContext`.
pub struct PlainWalker<'a> {
    root: Option<PathBuf>,
    stack: Vec<Frame>,
    context: &'a mut WalkContext,
}

impl<'a> PlainWalker<'a> {
    /// `root` is expected to be an existing, absolute path.
    pub fn new(root: impl Into<PathBuf>, context: &'a mut WalkContext) -> Self {
        Self {
            root: Some(root.into()),
            stack: Vec::new(),
            context,
        }
    }

    fn start(&mut self, root: PathBuf) -> Rc<Node> {
        let is_dir = root.is_dir();
        let node = Rc::new(Node::root(root, is_dir));
        if is_dir {
            self.stack.push(Frame::open(Rc::clone(&node)));
        } else {
            self.context.record_file();
        }
        node
    }
}

impl Iterator for PlainWalker<'_> {
    type Item = Rc<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            return Some(self.start(root));
        }

        loop {
            let frame = self.stack.last_mut()?;
            let Some((entry, is_last)) = frame.next_child() else {
                self.stack.pop();
                continue;
            };

            let node = Rc::new(Node::child(
                entry.path,
                Rc::clone(&frame.node),
                is_last,
                entry.is_dir,
            ));

            if entry.is_dir {
                self.context.record_directory();
                self.stack.push(Frame::open(Rc::clone(&node)));
            } else {
                self.context.record_file();
            }
            return Some(node);
        }
    }
}
