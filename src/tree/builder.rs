//! Suffix tree builder

use super::node::{Node, NodeId, NodeRef, ROOT};
use super::validate;
use crate::config::BuildConfig;
use log::{debug, trace};
use thiserror::Error;

/// Terminal character appended to every text unless configured otherwise
pub const DEFAULT_SENTINEL: char = '$';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Input contains the reserved sentinel {sentinel:?} at position {position}")]
    InvalidInput { sentinel: char, position: usize },

    #[error("Internal consistency failure: {0}")]
    InternalConsistency(String),
}

/// A suffix tree over a sentinel-terminated text.
///
/// Nodes live in a single arena addressed by [`NodeId`]; the root is
/// [`ROOT`]. Once returned by [`TreeBuilder::build`] the tree is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixTree {
    text: Vec<char>,
    sentinel: char,
    pub(crate) nodes: Vec<Node>,
}

impl SuffixTree {
    fn with_root(text: Vec<char>, sentinel: char) -> Self {
        Self {
            text,
            sentinel,
            nodes: vec![Node::root()],
        }
    }

    pub(crate) fn chars(&self) -> &[char] {
        &self.text
    }

    /// The working text, sentinel included
    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    pub fn sentinel(&self) -> char {
        self.sentinel
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, ROOT)
    }

    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id < self.nodes.len()).then(|| NodeRef::new(self, id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// All nodes reachable from the root, in pre-order
    pub fn nodes(&self) -> Vec<NodeRef<'_>> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            order.push(NodeRef::new(self, id));
            stack.extend(self.nodes[id].children.iter().rev());
        }
        order
    }

    /// Leaves in pre-order
    pub fn leaves(&self) -> Vec<NodeRef<'_>> {
        self.nodes()
            .into_iter()
            .filter(|node| node.is_leaf())
            .collect()
    }

    /// Re-run the structural checks the builder performs after construction
    pub fn validate(&self) -> Result<(), TreeError> {
        validate::validate(self)
    }

    pub(crate) fn child_starting_with(&self, id: NodeId, c: char) -> Option<NodeId> {
        self.nodes[id].children.iter().copied().find(|&child| {
            self.nodes[child]
                .label_start
                .is_some_and(|start| self.text[start] == c)
        })
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Walk down from `from` along `suffix_start` and attach its remainder,
    /// splitting an edge when the suffix leaves it partway through.
    fn insert_suffix(&mut self, from: NodeId, suffix_start: usize) -> Result<(), TreeError> {
        let end = self.text.len();
        let mut current = from;
        let mut consumed = 0;

        loop {
            let position = suffix_start + consumed;
            if position >= end {
                return Err(TreeError::InternalConsistency(format!(
                    "suffix {} ends inside the tree",
                    suffix_start
                )));
            }

            let Some(child) = self.child_starting_with(current, self.text[position]) else {
                let leaf = self.push_node(Node::new(position, end - position, suffix_start, current));
                self.nodes[current].add_child(leaf);
                return Ok(());
            };

            let (label_start, label_len) = self.span(child)?;
            let matched = self.common_prefix(label_start, label_len, position);

            if matched == label_len {
                consumed += matched;
                current = child;
                continue;
            }

            return self.split_edge(current, child, matched, suffix_start, position + matched);
        }
    }

    fn span(&self, id: NodeId) -> Result<(usize, usize), TreeError> {
        let node = &self.nodes[id];
        node.label_start.map(|start| (start, node.len)).ok_or_else(|| {
            TreeError::InternalConsistency(format!("node {} has no edge label", id))
        })
    }

    /// Characters shared by the edge label and the text starting at `position`
    fn common_prefix(&self, label_start: usize, label_len: usize, position: usize) -> usize {
        self.text[label_start..label_start + label_len]
            .iter()
            .zip(&self.text[position..])
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Split the edge into `child` after `matched` characters.
    ///
    /// The new intermediate node takes the child's slot in `parent`; the old
    /// child keeps its origin and becomes the first child, the new leaf the
    /// second.
    fn split_edge(
        &mut self,
        parent: NodeId,
        child: NodeId,
        matched: usize,
        suffix_start: usize,
        leaf_start: usize,
    ) -> Result<(), TreeError> {
        let (label_start, label_len) = self.span(child)?;
        let origin = self.nodes[child].origin.unwrap_or(suffix_start);
        let end = self.text.len();

        trace!(
            "splitting node {} after {} of {} chars for suffix {}",
            child,
            matched,
            label_len,
            suffix_start
        );

        let middle = self.push_node(Node::new(label_start, matched, origin, parent));
        let slot = self.nodes[parent]
            .children
            .iter()
            .position(|&id| id == child)
            .ok_or_else(|| {
                TreeError::InternalConsistency(format!(
                    "node {} is not listed under its parent {}",
                    child, parent
                ))
            })?;
        self.nodes[parent].children[slot] = middle;

        let shortened = &mut self.nodes[child];
        shortened.label_start = Some(label_start + matched);
        shortened.len = label_len - matched;
        shortened.parent = Some(middle);
        self.nodes[middle].add_child(child);

        let leaf = self.push_node(Node::new(leaf_start, end - leaf_start, suffix_start, middle));
        self.nodes[middle].add_child(leaf);

        Ok(())
    }
}

/// Builds suffix trees by inserting suffixes one at a time from the root
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    sentinel: char,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL,
        }
    }

    pub fn with_sentinel(sentinel: char) -> Self {
        Self { sentinel }
    }

    pub fn from_config(config: &BuildConfig) -> Self {
        Self::with_sentinel(config.sentinel())
    }

    pub fn sentinel(&self) -> char {
        self.sentinel
    }

    /// Build the suffix tree of `text`.
    ///
    /// Fails with [`TreeError::InvalidInput`] when `text` already contains the
    /// sentinel. Suffixes are inserted shortest first, so for `"banana"` the
    /// root's children come out as `$`, `a`, `na`, `banana$`.
    pub fn build(&self, text: &str) -> Result<SuffixTree, TreeError> {
        if let Some(position) = text.chars().position(|c| c == self.sentinel) {
            return Err(TreeError::InvalidInput {
                sentinel: self.sentinel,
                position,
            });
        }

        let mut working: Vec<char> = text.chars().collect();
        working.push(self.sentinel);

        let mut tree = SuffixTree::with_root(working, self.sentinel);
        for suffix_start in (0..tree.text.len()).rev() {
            tree.insert_suffix(ROOT, suffix_start)?;
        }

        validate::validate(&tree)?;

        debug!(
            "built suffix tree over {} chars: {} nodes, {} leaves",
            tree.text.len(),
            tree.node_count(),
            tree.leaf_count()
        );

        Ok(tree)
    }
}

/// Build a suffix tree with the default `'$'` sentinel
pub fn build(text: &str) -> Result<SuffixTree, TreeError> {
    TreeBuilder::new().build(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(node: NodeRef<'_>) -> Vec<String> {
        node.children().map(|child| child.edge_label()).collect()
    }

    #[test]
    fn test_first_suffix_attaches_to_root() {
        let mut tree = SuffixTree::with_root("ab$".chars().collect(), '$');
        tree.insert_suffix(ROOT, 0).unwrap();

        assert_eq!(labels(tree.root()), vec!["ab$"]);
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn test_split_keeps_slot_and_order() {
        let mut tree = SuffixTree::with_root("xaab$".chars().collect(), '$');
        tree.insert_suffix(ROOT, 0).unwrap();
        tree.insert_suffix(ROOT, 2).unwrap();
        tree.insert_suffix(ROOT, 1).unwrap();

        assert_eq!(labels(tree.root()), vec!["xaab$", "a"]);
        let a = tree.root().child_starting_with('a').unwrap();
        assert!(a.is_intermediate());
        assert_eq!(labels(a), vec!["b$", "ab$"]);
        assert_eq!(a.start_index(), Some(2));

        let leaves: Vec<Option<usize>> = a.children().map(|c| c.start_index()).collect();
        assert_eq!(leaves, vec![Some(2), Some(1)]);
    }

    #[test]
    fn test_duplicate_suffix_is_internal_failure() {
        let mut tree = SuffixTree::with_root("ab$".chars().collect(), '$');
        tree.insert_suffix(ROOT, 1).unwrap();
        let err = tree.insert_suffix(ROOT, 1).unwrap_err();
        assert!(matches!(err, TreeError::InternalConsistency(_)));
    }

    #[test]
    fn test_rejects_sentinel_in_input() {
        let err = build("ab$c").unwrap_err();
        assert_eq!(
            err,
            TreeError::InvalidInput {
                sentinel: '$',
                position: 2
            }
        );
    }

    #[test]
    fn test_custom_sentinel() {
        let tree = TreeBuilder::with_sentinel('#').build("a$a").unwrap();
        assert_eq!(tree.text(), "a$a#");
        assert_eq!(tree.leaf_count(), 4);
    }
}
