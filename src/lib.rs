//! Document Tree Validator
//!
//! Checks rich-text document trees (nested element and text nodes in their
//! JSON form) against a fixed structural schema and reports the first
//! violation with a stable error key, messages and the node's path.
//!
//! This library provides:
//! - Node classification and the closed schema of element types and marks
//! - A pure, first-violation validator
//! - Configuration and the `doctree-check` command line front end

pub mod cli;
pub mod config;
pub mod document;
pub mod schema;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use schema::{ElementKind, Mark};
pub use validation::{
    validate, validate_document, ErrorKind, ValidationResult, Validator, ValidatorOptions,
    Violation,
};
