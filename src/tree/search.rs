//! Read-only queries over a finished suffix tree

use super::builder::SuffixTree;
use super::node::NodeRef;

impl SuffixTree {
    /// Locate the node at or below the end of `pattern`'s path.
    ///
    /// Returns `None` when the pattern leaves the tree.
    fn locus(&self, pattern: &str) -> Option<NodeRef<'_>> {
        let pattern: Vec<char> = pattern.chars().collect();
        let mut current = self.root();
        let mut matched = 0;

        while matched < pattern.len() {
            let child = current.child_starting_with(pattern[matched])?;
            let label = child.label_chars();
            let take = label.len().min(pattern.len() - matched);
            if label[..take] != pattern[matched..matched + take] {
                return None;
            }
            matched += take;
            current = child;
        }

        Some(current)
    }

    /// Whether `pattern` occurs in the input text.
    ///
    /// The sentinel is not part of the input, so patterns containing it never
    /// match. The empty pattern always does.
    pub fn contains(&self, pattern: &str) -> bool {
        !pattern.contains(self.sentinel()) && self.locus(pattern).is_some()
    }

    /// Sorted start positions of every occurrence of `pattern`
    pub fn occurrences(&self, pattern: &str) -> Vec<usize> {
        if pattern.is_empty() || pattern.contains(self.sentinel()) {
            return Vec::new();
        }
        let Some(locus) = self.locus(pattern) else {
            return Vec::new();
        };

        let mut positions = Vec::new();
        let mut stack = vec![locus];
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                positions.extend(node.start_index());
            } else {
                stack.extend(node.children());
            }
        }
        positions.sort_unstable();
        positions
    }

    /// Every leaf path paired with its start position, shortest suffix last
    pub fn suffixes(&self) -> Vec<(usize, String)> {
        let mut suffixes: Vec<(usize, String)> = self
            .leaves()
            .into_iter()
            .filter_map(|leaf| leaf.start_index().map(|start| (start, leaf.path_label())))
            .collect();
        suffixes.sort_by_key(|(start, _)| *start);
        suffixes
    }
}
