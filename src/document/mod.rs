//! Document Model
//!
//! Typed views over a caller-constructed document tree (`serde_json::Value`)
//! and the diagnostic path labels used to locate nodes in it.

pub mod node;

pub use node::{
    classify, declared_type, ElementNode, ElementType, NodeRef, TextNode, UnsupportedNode,
};

/// Label of the `index`-th top-level node, e.g. `root[0]`
pub fn root_label(index: usize) -> String {
    format!("root[{}]", index)
}

/// Label of the `index`-th child of a node of type `parent_type`, e.g. `ul[2]`
pub fn child_label(parent_type: &str, index: usize) -> String {
    format!("{}[{}]", parent_type, index)
}

/// Render a path for developer-facing messages
pub fn display_path(path: &[String]) -> String {
    path.join(" > ")
}
