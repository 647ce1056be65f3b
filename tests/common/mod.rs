//! Common test utilities

#![allow(dead_code)]

use std::collections::BTreeSet;

use stree::{NodeRef, SuffixTree};

/// Every node reachable from the root, collected recursively
pub fn collect_nodes<'t>(node: NodeRef<'t>, nodes: &mut Vec<NodeRef<'t>>) {
    nodes.push(node);
    for child in node.children() {
        collect_nodes(child, nodes);
    }
}

/// All suffixes of `text` followed by `sentinel`, the sentinel alone included
pub fn expected_suffixes(text: &str, sentinel: char) -> BTreeSet<String> {
    let working: Vec<char> = text.chars().chain(std::iter::once(sentinel)).collect();
    (0..working.len())
        .map(|start| working[start..].iter().collect())
        .collect()
}

/// Assert the structural properties every suffix tree of `text` must have
pub fn check_suffix_tree_properties(tree: &SuffixTree, text: &str) {
    let root = tree.root();
    let mut nodes = Vec::new();
    collect_nodes(root, &mut nodes);

    let leaves: Vec<NodeRef<'_>> = nodes.iter().copied().filter(|n| n.is_leaf()).collect();
    let roots: Vec<NodeRef<'_>> = nodes.iter().copied().filter(|n| n.is_root()).collect();
    let intermediates: Vec<NodeRef<'_>> =
        nodes.iter().copied().filter(|n| n.is_intermediate()).collect();

    // one leaf per suffix of the sentinel-terminated text
    assert_eq!(leaves.len(), text.chars().count() + 1, "leaf count for {:?}", text);

    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0], root);
    assert_eq!(root.start_index(), None);
    assert_eq!(root.edge_label(), "");

    for node in &intermediates {
        assert!(node.child_count() >= 2, "intermediate {:?}", node.path_label());
    }

    for node in &nodes {
        let firsts: BTreeSet<char> = node
            .children()
            .filter_map(|child| child.edge_label().chars().next())
            .collect();
        assert_eq!(firsts.len(), node.child_count());
    }

    let paths: Vec<String> = leaves.iter().map(|leaf| leaf.path_label()).collect();
    let unique: BTreeSet<String> = paths.iter().cloned().collect();
    assert_eq!(unique.len(), paths.len(), "duplicate leaf paths for {:?}", text);
    assert_eq!(unique, expected_suffixes(text, tree.sentinel()));

    let working: Vec<char> = tree.text().chars().collect();
    for leaf in &leaves {
        let start = leaf.start_index().unwrap();
        let suffix: String = working[start..].iter().collect();
        assert_eq!(leaf.path_label(), suffix);
    }
}

/// Edge labels of a node's children, in order
pub fn child_labels(node: NodeRef<'_>) -> Vec<String> {
    node.children().map(|child| child.edge_label()).collect()
}
