//! Validation Results
//!
//! The first-violation report and its wire form.

use serde::{Serialize, Serializer};
use std::fmt;

/// Category of a violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyContent,
    InvalidContent,
    InvalidStructure,
    UnsupportedNode,
    DepthExceeded,
}

impl ErrorKind {
    /// Code fragment used in error keys
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::EmptyContent => "empty_content",
            ErrorKind::InvalidContent => "invalid_content",
            ErrorKind::InvalidStructure => "invalid_structure",
            ErrorKind::UnsupportedNode => "unsupported_node",
            ErrorKind::DepthExceeded => "depth_exceeded",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The first structural problem found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    #[serde(skip)]
    pub kind: ErrorKind,
    /// Developer-facing description including the path
    pub error: String,
    /// Stable machine-readable key, e.g. `ul_invalid_structure`
    pub error_key: String,
    pub user_friendly_message: String,
    /// Type of the offending node; `None` for document-level and unsupported nodes
    pub node_type: Option<String>,
    pub path: Vec<String>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_key, self.error)
    }
}

/// Outcome of validating a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(Violation),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn violation(&self) -> Option<&Violation> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(violation) => Some(violation),
        }
    }

    pub fn into_result(self) -> Result<(), Violation> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(violation) => Err(violation),
        }
    }
}

impl From<Result<(), Violation>> for ValidationResult {
    fn from(result: Result<(), Violation>) -> Self {
        match result {
            Ok(()) => ValidationResult::Valid,
            Err(violation) => ValidationResult::Invalid(violation),
        }
    }
}

/// Wire form: `{"isValid": true}` or `{"isValid": false, ...violation}`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireResult<'a> {
    is_valid: bool,
    #[serde(flatten)]
    violation: Option<&'a Violation>,
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireResult {
            is_valid: self.is_valid(),
            violation: self.violation(),
        }
        .serialize(serializer)
    }
}
