//! Validator Options
//!
//! Policy switches for behaviors where the legacy validator was looser
//! than the schema intends. Defaults are the strict behavior.

use serde::Deserialize;

/// Default nesting limit, counted in nodes from the document root.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Validation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorOptions {
    /// Nodes nested deeper than this fail with `DepthExceeded`
    pub max_depth: usize,
    /// Require image `width`/`height` to hold real numbers
    pub strict_dimensions: bool,
    /// Validate the children of list items
    pub descend_into_list_items: bool,
    /// Let elements with an unknown `type` pass instead of rejecting them
    pub allow_unrecognized_elements: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_dimensions: true,
            descend_into_list_items: true,
            allow_unrecognized_elements: false,
        }
    }
}

impl ValidatorOptions {
    /// The behavior of the original validator: no dimension checks, list
    /// items not descended into, unknown element types accepted.
    pub fn legacy() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_dimensions: false,
            descend_into_list_items: false,
            allow_unrecognized_elements: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let options: ValidatorOptions = toml::from_str("max_depth = 8").unwrap();
        assert_eq!(options.max_depth, 8);
        assert!(options.strict_dimensions);
        assert!(options.descend_into_list_items);
        assert!(!options.allow_unrecognized_elements);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(toml::from_str::<ValidatorOptions>("max_dept = 8").is_err());
    }
}
