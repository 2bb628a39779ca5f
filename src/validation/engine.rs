//! Validation Engine
//!
//! Depth-first, pre-order, left-to-right walk over the document tree that
//! stops at the first violation.

use serde_json::Value;

use super::messages::{self, TEXT_NODE_TYPE};
use super::options::ValidatorOptions;
use super::result::{ValidationResult, Violation};
use crate::document::{
    child_label, classify, declared_type, display_path, root_label, ElementNode, ElementType,
    NodeRef, TextNode,
};
use crate::schema::{AttributeCheck, ElementKind, Mark};

/// Stateless document validator
///
/// Holds only its policy, so a single instance can be shared freely
/// between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validator {
    options: ValidatorOptions,
}

impl Validator {
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Validate a document given as its top-level nodes
    pub fn validate(&self, nodes: &[Value]) -> ValidationResult {
        self.walk(nodes).into()
    }

    /// Validate a document given as a JSON value, which must be a non-empty array
    pub fn validate_value(&self, document: &Value) -> ValidationResult {
        match document.as_array() {
            Some(nodes) => self.validate(nodes),
            None => ValidationResult::Invalid(messages::empty_document()),
        }
    }

    fn walk(&self, nodes: &[Value]) -> Result<(), Violation> {
        if nodes.is_empty() {
            return Err(messages::empty_document());
        }

        let mut path = Vec::new();
        for (index, node) in nodes.iter().enumerate() {
            path.push(root_label(index));
            self.validate_node(node, &mut path)?;
            path.pop();
        }

        Ok(())
    }

    /// `path` already ends with this node's label.
    fn validate_node(&self, node: &Value, path: &mut Vec<String>) -> Result<(), Violation> {
        log::trace!("visiting {}", display_path(path));

        match classify(node) {
            NodeRef::Text(text) => {
                self.check_depth(TEXT_NODE_TYPE, path)?;
                check_text(text, path)
            }
            NodeRef::Element(element) => {
                self.check_depth(element.type_name(), path)?;
                self.check_element(element, path)
            }
            NodeRef::Unsupported(unsupported) => {
                Err(messages::unsupported(unsupported.declared_type, path))
            }
        }
    }

    fn check_depth(&self, node_type: &str, path: &[String]) -> Result<(), Violation> {
        if path.len() > self.options.max_depth {
            return Err(messages::depth_exceeded(
                node_type,
                self.options.max_depth,
                path,
            ));
        }
        Ok(())
    }

    fn check_element(
        &self,
        element: ElementNode<'_>,
        path: &mut Vec<String>,
    ) -> Result<(), Violation> {
        let kind = match element.kind {
            ElementType::Known(kind) => kind,
            ElementType::Unrecognized(name) if self.options.allow_unrecognized_elements => {
                log::debug!("accepting unrecognized element '{}' without checks", name);
                return Ok(());
            }
            ElementType::Untyped if self.options.allow_unrecognized_elements => return Ok(()),
            ElementType::Unrecognized(name) => return Err(messages::unsupported(Some(name), path)),
            ElementType::Untyped => return Err(messages::unsupported(None, path)),
        };
        let rule = kind.rule();

        if rule.must_not_be_empty && element.children.is_empty() {
            return Err(messages::empty_element(kind, path));
        }

        match rule.attributes {
            AttributeCheck::None => {}
            AttributeCheck::Image => self.check_image(&element, path)?,
            AttributeCheck::Link => {
                if element.str_attribute("url").is_none() {
                    return Err(messages::invalid_link(path));
                }
            }
        }

        let descends = match kind {
            ElementKind::ListItem => rule.descends && self.options.descend_into_list_items,
            _ => rule.descends,
        };
        if !descends {
            return Ok(());
        }

        for (index, child) in element.children.iter().enumerate() {
            path.push(child_label(kind.as_str(), index));

            let child_kind = declared_type(child).and_then(|name| name.parse::<ElementKind>().ok());
            if !rule.permits_child(child_kind) {
                return Err(messages::invalid_child(
                    kind,
                    &rule,
                    child_type_name(child),
                    path,
                ));
            }

            self.validate_node(child, path)?;
            path.pop();
        }

        Ok(())
    }

    fn check_image(&self, element: &ElementNode<'_>, path: &[String]) -> Result<(), Violation> {
        let has_url = element.str_attribute("url").is_some();
        let has_dimensions = !self.options.strict_dimensions
            || (is_numeric(element.attribute("width")) && is_numeric(element.attribute("height")));

        if has_url && has_dimensions {
            Ok(())
        } else {
            Err(messages::invalid_image(path))
        }
    }
}

fn check_text(text: TextNode<'_>, path: &[String]) -> Result<(), Violation> {
    if text.text().is_none() {
        return Err(messages::invalid_text(path));
    }

    match text.attribute_keys().find(|key| key.parse::<Mark>().is_err()) {
        Some(mark) => Err(messages::invalid_mark(mark, path)),
        None => Ok(()),
    }
}

/// A finite JSON number, or a string holding one
fn is_numeric(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(number)) => number.as_f64().is_some_and(f64::is_finite),
        Some(Value::String(s)) => s.trim().parse::<f64>().is_ok_and(f64::is_finite),
        _ => false,
    }
}

/// Type name of a child as shown in structure errors
fn child_type_name(child: &Value) -> &str {
    match declared_type(child) {
        Some(name) => name,
        None if child.get("text").is_some() => TEXT_NODE_TYPE,
        None => "untyped",
    }
}

/// Validate a document with the default options
pub fn validate(nodes: &[Value]) -> ValidationResult {
    Validator::default().validate(nodes)
}

/// Validate a JSON document value with the default options
pub fn validate_document(document: &Value) -> ValidationResult {
    Validator::default().validate_value(document)
}
