//! Data-quality test annotations attached to generated columns

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A test annotation that is either a bare name or a parameterized map
///
/// Simple tests render as plain strings (`- not_null`); parameterized tests
/// render as single-key maps (`- accepted_values: {values: [...]}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TestDefinition {
    /// Simple test with no parameters (e.g., "unique", "not_null")
    Simple(String),
    /// Parameterized test keyed by test name
    Parameterized(BTreeMap<String, serde_yaml::Value>),
}

impl TestDefinition {
    /// A bare `not_null` test
    pub fn not_null() -> Self {
        TestDefinition::Simple("not_null".to_string())
    }

    /// A bare `unique` test
    pub fn unique() -> Self {
        TestDefinition::Simple("unique".to_string())
    }

    /// A parameterized test with the given name and parameters
    pub fn parameterized(name: &str, params: serde_yaml::Value) -> Self {
        let mut map = BTreeMap::new();
        map.insert(name.to_string(), params);
        TestDefinition::Parameterized(map)
    }

    /// The test name (the map key for parameterized tests)
    pub fn name(&self) -> Option<&str> {
        match self {
            TestDefinition::Simple(name) => Some(name),
            TestDefinition::Parameterized(map) => map.keys().next().map(String::as_str),
        }
    }
}

/// Derive source-column tests from schema-definition constraints.
///
/// A primary key gets `[unique, not_null]`; a non-nullable column gets
/// `[not_null]`; anything else gets no tests.
pub fn derive_constraint_tests(is_primary_key: bool, is_nullable: bool) -> Vec<TestDefinition> {
    if is_primary_key {
        vec![TestDefinition::unique(), TestDefinition::not_null()]
    } else if !is_nullable {
        vec![TestDefinition::not_null()]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_constraint_tests() {
        let pk = derive_constraint_tests(true, false);
        assert_eq!(pk, vec![TestDefinition::unique(), TestDefinition::not_null()]);

        // Primary key wins even when nominally nullable
        let pk_nullable = derive_constraint_tests(true, true);
        assert_eq!(pk_nullable.len(), 2);

        let required = derive_constraint_tests(false, false);
        assert_eq!(required, vec![TestDefinition::not_null()]);

        let plain = derive_constraint_tests(false, true);
        assert!(plain.is_empty());
    }

    #[test]
    fn test_serialization_shapes() {
        let simple = TestDefinition::not_null();
        assert_eq!(serde_yaml::to_string(&simple).unwrap().trim(), "not_null");

        let params = serde_yaml::from_str::<serde_yaml::Value>("values: [a, b]").unwrap();
        let parameterized = TestDefinition::parameterized("accepted_values", params);
        let yaml = serde_yaml::to_string(&parameterized).unwrap();
        assert!(yaml.contains("accepted_values:"), "got: {}", yaml);
        assert_eq!(parameterized.name(), Some("accepted_values"));
    }
}
