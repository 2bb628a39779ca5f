//! Document Schema
//!
//! The fixed, closed schema: element kinds, marks and the structural rule
//! table.

pub mod types;

pub use types::{AttributeCheck, ElementKind, Mark, StructuralRule};
