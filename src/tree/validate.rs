//! Structural checks over a finished suffix tree

use std::collections::HashSet;

use super::builder::{SuffixTree, TreeError};
use super::node::ROOT;

fn broken(message: String) -> TreeError {
    TreeError::InternalConsistency(message)
}

/// Check every structural invariant of `tree`.
///
/// - exactly one parentless node, and it is the root
/// - parent and child links agree
/// - intermediate nodes have at least two children
/// - siblings never share a first label character
/// - every path label occurs at its node's origin
/// - leaves cover each suffix of the working text exactly once
pub fn validate(tree: &SuffixTree) -> Result<(), TreeError> {
    let text = tree.chars();
    let nodes = &tree.nodes;

    let roots: Vec<usize> = (0..nodes.len()).filter(|&id| nodes[id].is_root()).collect();
    if roots != [ROOT] {
        return Err(broken(format!("expected a single root at 0, found {:?}", roots)));
    }

    let reachable = tree.nodes();
    if reachable.len() != nodes.len() {
        return Err(broken(format!(
            "{} of {} nodes are reachable from the root",
            reachable.len(),
            nodes.len()
        )));
    }

    let mut origins = HashSet::new();

    for node in reachable {
        let id = node.id();
        let record = &nodes[id];

        for &child in &record.children {
            if nodes[child].parent != Some(id) {
                return Err(broken(format!("node {} does not point back to parent {}", child, id)));
            }
        }

        if node.is_intermediate() && node.child_count() < 2 {
            return Err(broken(format!(
                "intermediate node {} has {} child",
                id,
                node.child_count()
            )));
        }

        let mut firsts = HashSet::new();
        for child in node.children() {
            let Some(&first) = child.label_chars().first() else {
                return Err(broken(format!("node {} has an empty edge label", child.id())));
            };
            if !firsts.insert(first) {
                return Err(broken(format!(
                    "node {} has two children starting with {:?}",
                    id, first
                )));
            }
        }

        let Some(origin) = node.start_index() else {
            continue;
        };
        let path: Vec<char> = node.path_label().chars().collect();
        if text.get(origin..origin + path.len()) != Some(path.as_slice()) {
            return Err(broken(format!(
                "path of node {} does not occur at position {}",
                id, origin
            )));
        }

        if node.is_leaf() {
            if origin + path.len() != text.len() {
                return Err(broken(format!("leaf {} stops short of the sentinel", id)));
            }
            if !origins.insert(origin) {
                return Err(broken(format!("suffix {} has two leaves", origin)));
            }
        }
    }

    if origins.len() != text.len() {
        return Err(broken(format!(
            "{} leaves for {} suffixes",
            origins.len(),
            text.len()
        )));
    }

    Ok(())
}
