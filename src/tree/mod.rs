//! Suffix tree construction and traversal

mod builder;
mod node;
mod search;
mod validate;

pub use builder::{build, SuffixTree, TreeBuilder, TreeError, DEFAULT_SENTINEL};
pub use node::{NodeId, NodeRef, ROOT};
