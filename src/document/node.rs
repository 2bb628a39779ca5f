//! Node Classification
//!
//! Borrowed, typed views over caller-constructed JSON nodes.
//! No validation logic here - only shape detection.

use serde_json::{Map, Value};

use crate::schema::ElementKind;

/// A classified node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    /// An object carrying a `text` key
    Text(TextNode<'a>),
    /// An object with a `children` array and no `text` key
    Element(ElementNode<'a>),
    /// Anything else
    Unsupported(UnsupportedNode<'a>),
}

/// A text leaf
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextNode<'a> {
    fields: &'a Map<String, Value>,
}

/// A container node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementNode<'a> {
    fields: &'a Map<String, Value>,
    /// Parsed `type` field
    pub kind: ElementType<'a>,
    pub children: &'a [Value],
}

/// The `type` of an element, as far as it could be recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType<'a> {
    Known(ElementKind),
    Unrecognized(&'a str),
    Untyped,
}

/// A value matching neither the text nor the element shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnsupportedNode<'a> {
    /// Declared `type`, if the value is an object with a string `type`
    pub declared_type: Option<&'a str>,
}

/// Classify a JSON value as text, element or unsupported
pub fn classify(value: &Value) -> NodeRef<'_> {
    let Some(fields) = value.as_object() else {
        return NodeRef::Unsupported(UnsupportedNode {
            declared_type: None,
        });
    };

    if fields.contains_key("text") {
        return NodeRef::Text(TextNode { fields });
    }

    let kind = ElementType::from_field(fields.get("type"));
    let children = match fields.get("children") {
        Some(Value::Array(children)) => Some(children.as_slice()),
        // Void elements (img) may omit `children` entirely.
        None if kind.known().is_some_and(|k| !k.rule().descends) => Some(&[][..]),
        _ => None,
    };

    match children {
        Some(children) => NodeRef::Element(ElementNode {
            fields,
            kind,
            children,
        }),
        None => NodeRef::Unsupported(UnsupportedNode {
            declared_type: fields.get("type").and_then(Value::as_str),
        }),
    }
}

/// The declared `type` string of a value, if any
pub fn declared_type(value: &Value) -> Option<&str> {
    value.get("type").and_then(Value::as_str)
}

impl<'a> TextNode<'a> {
    /// The `text` field, if it is a string
    pub fn text(&self) -> Option<&'a str> {
        self.fields.get("text").and_then(Value::as_str)
    }

    /// Every key besides `text`, in document order
    pub fn attribute_keys(&self) -> impl Iterator<Item = &'a str> {
        self.fields
            .keys()
            .map(String::as_str)
            .filter(|key| *key != "text")
    }
}

impl<'a> ElementNode<'a> {
    pub fn attribute(&self, name: &str) -> Option<&'a Value> {
        self.fields.get(name)
    }

    /// A string attribute, `None` when absent or not a string
    pub fn str_attribute(&self, name: &str) -> Option<&'a str> {
        self.attribute(name).and_then(Value::as_str)
    }

    /// Name used in paths, error keys and messages
    pub fn type_name(&self) -> &'a str {
        self.kind.name()
    }
}

impl<'a> ElementType<'a> {
    fn from_field(field: Option<&'a Value>) -> Self {
        match field.and_then(Value::as_str) {
            Some(name) => match name.parse::<ElementKind>() {
                Ok(kind) => ElementType::Known(kind),
                Err(()) => ElementType::Unrecognized(name),
            },
            None => ElementType::Untyped,
        }
    }

    pub fn known(&self) -> Option<ElementKind> {
        match self {
            ElementType::Known(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            ElementType::Known(kind) => kind.as_str(),
            ElementType::Unrecognized(name) => name,
            ElementType::Untyped => "untyped",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_text() {
        let value = json!({"text": "hi", "bold": true, "color": "red"});
        let NodeRef::Text(text) = classify(&value) else {
            panic!("Expected text node");
        };
        assert_eq!(text.text(), Some("hi"));
        assert_eq!(text.attribute_keys().collect::<Vec<_>>(), vec!["bold", "color"]);
    }

    #[test]
    fn test_classify_text_with_non_string_text() {
        let value = json!({"text": 123});
        let NodeRef::Text(text) = classify(&value) else {
            panic!("Expected text node");
        };
        assert_eq!(text.text(), None);
    }

    #[test]
    fn test_classify_element() {
        let value = json!({"type": "p", "children": [{"text": "x"}]});
        let NodeRef::Element(element) = classify(&value) else {
            panic!("Expected element node");
        };
        assert_eq!(element.kind, ElementType::Known(ElementKind::Paragraph));
        assert_eq!(element.children.len(), 1);
        assert_eq!(element.type_name(), "p");
    }

    #[test]
    fn test_classify_unrecognized_and_untyped_elements() {
        let value = json!({"type": "div", "children": []});
        let NodeRef::Element(element) = classify(&value) else {
            panic!("Expected element node");
        };
        assert_eq!(element.kind, ElementType::Unrecognized("div"));

        let value = json!({"children": []});
        let NodeRef::Element(element) = classify(&value) else {
            panic!("Expected element node");
        };
        assert_eq!(element.kind, ElementType::Untyped);
        assert_eq!(element.type_name(), "untyped");
    }

    #[test]
    fn test_classify_image_without_children() {
        let value = json!({"type": "img", "url": "x"});
        let NodeRef::Element(element) = classify(&value) else {
            panic!("Expected element node");
        };
        assert_eq!(element.kind, ElementType::Known(ElementKind::Image));
        assert!(element.children.is_empty());
        assert_eq!(element.str_attribute("url"), Some("x"));
    }

    #[test]
    fn test_classify_unsupported() {
        assert!(matches!(
            classify(&json!({"type": "p", "url": "x"})),
            NodeRef::Unsupported(UnsupportedNode {
                declared_type: Some("p")
            })
        ));
        assert!(matches!(
            classify(&json!({"type": "p", "children": "nope"})),
            NodeRef::Unsupported(_)
        ));
        assert!(matches!(
            classify(&json!(42)),
            NodeRef::Unsupported(UnsupportedNode {
                declared_type: None
            })
        ));
    }
}
