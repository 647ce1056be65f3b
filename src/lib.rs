//! Naive suffix tree construction and traversal.
//!
//! ```
//! let tree = stree::build("banana").unwrap();
//! assert_eq!(tree.leaf_count(), 7);
//! assert_eq!(tree.occurrences("ana"), vec![1, 3]);
//! ```

pub mod config;
pub mod output;
pub mod tree;

pub use tree::{build, NodeId, NodeRef, SuffixTree, TreeBuilder, TreeError};
