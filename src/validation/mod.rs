//! Validation Engine
//!
//! Structural validation of document trees, separated from classification
//! and from configuration/CLI concerns.

pub mod engine;
pub mod messages;
pub mod options;
pub mod result;

pub use engine::{validate, validate_document, Validator};
pub use options::{ValidatorOptions, DEFAULT_MAX_DEPTH};
pub use result::{ErrorKind, ValidationResult, Violation};
