//! Suffix tree output rendering

use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::config::RenderConfig;
use crate::tree::{NodeRef, SuffixTree};

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Render a tree and write it to file
pub fn render_tree(
    tree: &SuffixTree,
    options: &RenderConfig,
    output_path: &Path,
) -> Result<(), OutputError> {
    let content = render_to_string(tree, options);

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(output_path)?;
    file.write_all(content.as_bytes())?;

    Ok(())
}

/// Render a tree to a string.
///
/// The first line is the working text; every other line is one edge label.
pub fn render_to_string(tree: &SuffixTree, options: &RenderConfig) -> String {
    let mut output = String::new();
    output.push_str(&tree.text());
    output.push('\n');

    let root = tree.root();
    let count = root.child_count();
    for (i, child) in root.children().enumerate() {
        render_node(child, options, &mut output, "", i == count - 1);
    }
    output
}

fn render_node(
    node: NodeRef<'_>,
    options: &RenderConfig,
    output: &mut String,
    prefix: &str,
    is_last: bool,
) {
    let connector = if is_last { "└── " } else { "├── " };
    output.push_str(prefix);
    output.push_str(connector);
    output.push_str(&node.edge_label());

    if node.is_leaf() && options.show_start_index {
        if let Some(start) = node.start_index() {
            output.push_str(&format!(" [{}]", start));
        }
    }
    output.push('\n');

    let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
    let count = node.child_count();
    for (i, child) in node.children().enumerate() {
        render_node(child, options, output, &child_prefix, i == count - 1);
    }
}
