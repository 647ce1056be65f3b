//! Suffix tree nodes and read handles

use super::builder::SuffixTree;

/// Index of a node in the tree arena
pub type NodeId = usize;

/// The root is always the first node pushed into the arena
pub const ROOT: NodeId = 0;

/// A node record in the arena.
///
/// The edge label is a `(label_start, len)` span into the sentinel-terminated
/// text. `origin` is where the path from the root to this node begins in the
/// text; for a leaf that is the start of the suffix it terminates.
///
/// Roles are never stored: a node is the root when it has no parent, a leaf
/// when it has no children and intermediate otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) label_start: Option<usize>,
    pub(crate) len: usize,
    pub(crate) origin: Option<usize>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self {
            label_start: None,
            len: 0,
            origin: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn new(label_start: usize, len: usize, origin: usize, parent: NodeId) -> Self {
        Self {
            label_start: Some(label_start),
            len,
            origin: Some(origin),
            parent: Some(parent),
            children: Vec::new(),
        }
    }

    /// Append a child. First-character uniqueness is the builder's job.
    pub(crate) fn add_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    pub(crate) fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn is_intermediate(&self) -> bool {
        !self.is_root() && !self.is_leaf()
    }
}

/// Borrowed view of a node inside a finished [`SuffixTree`]
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t SuffixTree,
    id: NodeId,
}

impl<'t> NodeRef<'t> {
    pub(crate) fn new(tree: &'t SuffixTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn node(&self) -> &'t Node {
        &self.tree.nodes[self.id]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The substring consumed on the edge from the parent; empty for the root
    pub fn edge_label(&self) -> String {
        self.label_chars().iter().collect()
    }

    pub(crate) fn label_chars(&self) -> &'t [char] {
        let node = self.node();
        match node.label_start {
            Some(start) => &self.tree.chars()[start..start + node.len],
            None => &[],
        }
    }

    /// Position of the edge label in the working text
    pub fn label_start(&self) -> Option<usize> {
        self.node().label_start
    }

    pub fn label_len(&self) -> usize {
        self.node().len
    }

    /// Text position where this node's root path begins.
    ///
    /// For a leaf this is the start of its suffix. `None` for the root.
    pub fn start_index(&self) -> Option<usize> {
        self.node().origin
    }

    /// Number of characters on the path from the root to this node
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = Some(*self);
        while let Some(node) = current {
            depth += node.label_len();
            current = node.parent();
        }
        depth
    }

    /// Concatenation of edge labels from the root down to this node
    pub fn path_label(&self) -> String {
        let mut labels = Vec::new();
        let mut current = Some(*self);
        while let Some(node) = current {
            labels.push(node.label_chars());
            current = node.parent();
        }
        labels.iter().rev().flat_map(|chars| chars.iter()).collect()
    }

    pub fn parent(&self) -> Option<NodeRef<'t>> {
        self.node().parent.map(|id| NodeRef::new(self.tree, id))
    }

    /// Children in insertion order
    pub fn children(&self) -> impl ExactSizeIterator<Item = NodeRef<'t>> + 't {
        let tree = self.tree;
        self.node()
            .children
            .iter()
            .map(move |&id| NodeRef::new(tree, id))
    }

    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }

    /// The child whose edge label begins with `c`, if any
    pub fn child_starting_with(&self, c: char) -> Option<NodeRef<'t>> {
        self.tree
            .child_starting_with(self.id, c)
            .map(|id| NodeRef::new(self.tree, id))
    }

    pub fn is_root(&self) -> bool {
        self.node().is_root()
    }

    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    pub fn is_intermediate(&self) -> bool {
        self.node().is_intermediate()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}
