//! Violation Builders
//!
//! Error keys and the developer/user message pairs for every violation.

use super::result::{ErrorKind, Violation};
use crate::document::display_path;
use crate::schema::{ElementKind, StructuralRule};

/// Node type reported for text leaves
pub const TEXT_NODE_TYPE: &str = "text";
/// Prefix of the error key for document-level problems
pub const DOCUMENT_KEY: &str = "document";

fn violation(
    kind: ErrorKind,
    error_key: String,
    error: String,
    user_friendly_message: String,
    node_type: Option<&str>,
    path: &[String],
) -> Violation {
    log::debug!("{} at [{}]", error_key, display_path(path));
    Violation {
        kind,
        error,
        error_key,
        user_friendly_message,
        node_type: node_type.map(str::to_string),
        path: path.to_vec(),
    }
}

pub fn empty_document() -> Violation {
    violation(
        ErrorKind::EmptyContent,
        format!("{}_{}", DOCUMENT_KEY, ErrorKind::EmptyContent),
        "Document should be a non-empty array of nodes.".to_string(),
        "The content seems to be empty. Please add some content and try again.".to_string(),
        None,
        &[],
    )
}

pub fn invalid_text(path: &[String]) -> Violation {
    violation(
        ErrorKind::InvalidContent,
        format!("{}_{}", TEXT_NODE_TYPE, ErrorKind::InvalidContent),
        format!(
            "Text node at path {} has an invalid 'text' property.",
            display_path(path)
        ),
        "There is an issue with the text content. Please review the text and try again."
            .to_string(),
        Some(TEXT_NODE_TYPE),
        path,
    )
}

pub fn invalid_mark(mark: &str, path: &[String]) -> Violation {
    violation(
        ErrorKind::InvalidContent,
        format!("{}_{}_{}", TEXT_NODE_TYPE, mark, ErrorKind::InvalidContent),
        format!(
            "Text node at path {} has an invalid mark '{}'.",
            display_path(path),
            mark
        ),
        format!(
            "There is an unsupported text style: '{}'. Please remove or correct it.",
            mark
        ),
        Some(TEXT_NODE_TYPE),
        path,
    )
}

pub fn empty_element(kind: ElementKind, path: &[String]) -> Violation {
    let name = kind.as_str();
    let readable = name.replace('_', " ");

    violation(
        ErrorKind::EmptyContent,
        format!("{}_{}", name, ErrorKind::EmptyContent),
        format!("{} at path {} should not be empty.", name, display_path(path)),
        format!(
            "The {} should contain content. Please add content inside the {}.",
            readable, readable
        ),
        Some(name),
        path,
    )
}

/// A child whose type is not permitted under `parent`; `path` ends at the child
pub fn invalid_child(
    parent: ElementKind,
    rule: &StructuralRule,
    actual: &str,
    path: &[String],
) -> Violation {
    let parent_path = &path[..path.len().saturating_sub(1)];
    let (label, user_friendly_message) = match parent {
        ElementKind::UnorderedList | ElementKind::OrderedList => (
            format!("List ({})", parent),
            "There is an issue with the list structure. Please review and correct the list items.",
        ),
        ElementKind::Table => (
            "Table".to_string(),
            "The table structure seems to have an issue. Please check the rows and columns.",
        ),
        ElementKind::TableRow => (
            "Table row (tr)".to_string(),
            "There seems to be an issue with the table cells. Please ensure the cells are correct.",
        ),
        ElementKind::CodeBlock => (
            "Code block (code_block)".to_string(),
            "There is an issue with the code block structure. Please ensure the code is properly formatted.",
        ),
        _ => (
            parent.to_string(),
            "There is an issue with the content structure. Please review the content and try again.",
        ),
    };

    violation(
        ErrorKind::InvalidStructure,
        format!("{}_{}", parent, ErrorKind::InvalidStructure),
        format!(
            "{} at path {} has an invalid child type '{}' (expected {}).",
            label,
            display_path(parent_path),
            actual,
            rule.expected_children()
        ),
        user_friendly_message.to_string(),
        Some(parent.as_str()),
        path,
    )
}

pub fn invalid_image(path: &[String]) -> Violation {
    violation(
        ErrorKind::InvalidContent,
        format!("{}_{}", ElementKind::Image, ErrorKind::InvalidContent),
        format!(
            "Image (img) at path {} has invalid 'url', 'width', or 'height' properties.",
            display_path(path)
        ),
        "There is an issue with the image properties. Please ensure the image URL and dimensions are correct."
            .to_string(),
        Some(ElementKind::Image.as_str()),
        path,
    )
}

pub fn invalid_link(path: &[String]) -> Violation {
    violation(
        ErrorKind::InvalidContent,
        format!("{}_{}", ElementKind::Link, ErrorKind::InvalidContent),
        format!(
            "Link (a) at path {} has an invalid 'url' property.",
            display_path(path)
        ),
        "There is an issue with the link URL. Please ensure it is correct.".to_string(),
        Some(ElementKind::Link.as_str()),
        path,
    )
}

/// `declared_type` is the node's `type` string, if it had one
pub fn unsupported(declared_type: Option<&str>, path: &[String]) -> Violation {
    violation(
        ErrorKind::UnsupportedNode,
        format!(
            "{}_{}",
            ErrorKind::UnsupportedNode,
            declared_type.unwrap_or("untyped")
        ),
        format!("Invalid node type at path {}.", display_path(path)),
        "There is an issue with the content structure. Please review the content and try again."
            .to_string(),
        None,
        path,
    )
}

pub fn depth_exceeded(node_type: &str, max_depth: usize, path: &[String]) -> Violation {
    violation(
        ErrorKind::DepthExceeded,
        format!("{}_{}", node_type, ErrorKind::DepthExceeded),
        format!(
            "{} at path {} is nested deeper than the maximum depth of {}.",
            node_type,
            display_path(path),
            max_depth
        ),
        "The content is nested too deeply. Please simplify the structure and try again."
            .to_string(),
        Some(node_type),
        path,
    )
}
