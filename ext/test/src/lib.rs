//! allocfilter-test: Test entity domain for conformance testing
//!
//! Provides a simple entity implementing [`StringMapProperties`] so predicates
//! can be exercised without a real cost-allocation model.
//! This is the reference example of how a domain type becomes filterable.
//!
//! # Example
//!
//! ```
//! use allocfilter_test::prelude::*;
//!
//! // TestEntity holds named string maps
//! let entity = TestEntity::new()
//!     .with("label", "app", "frontend")
//!     .with("annotation", "owner", "ops");
//!
//! let filter = StringMapPredicate::<TestEntity>::value_equals("label", "app", "frontend");
//! assert!(filter.matches(&entity));
//! ```

use allocfilter::prelude::*;
use std::borrow::Cow;
use std::collections::HashMap;


/// Test entity: named string maps plus fields that refuse lookup.
///
/// Used for conformance testing where we need predictable,
/// controllable attribute data.
#[derive(Debug, Clone, Default)]
pub struct TestEntity {
    maps: HashMap<String, StringMap>,
    unavailable: HashMap<String, String>,
}

impl TestEntity {
    /// Create an entity with no attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `field[key] = value`, creating the field if needed (builder pattern).
    #[must_use]
    pub fn with(
        mut self,
        field: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.maps
            .entry(field.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// Declare an empty map attribute.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.maps.entry(field.into()).or_default();
        self
    }

    /// Make lookups of `field` fail with [`PropertyError::Unavailable`].
    #[must_use]
    pub fn unavailable(mut self, field: impl Into<String>, reason: impl Into<String>) -> Self {
        self.unavailable.insert(field.into(), reason.into());
        self
    }
}

impl StringMapProperties for TestEntity {
    fn string_map_property(&self, field: &str) -> Result<Cow<'_, StringMap>, PropertyError> {
        if let Some(reason) = self.unavailable.get(field) {
            return Err(PropertyError::unavailable(field, reason.as_str()));
        }
        self.maps
            .get(field)
            .map(Cow::Borrowed)
            .ok_or_else(|| PropertyError::unknown_field(field))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::TestEntity;
    pub use allocfilter::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_builder() {
        let entity = TestEntity::new()
            .with("label", "app", "web")
            .with("label", "team", "core");

        let labels = entity.string_map_property("label").unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.get("team").map(String::as_str), Some("core"));
    }

    #[test]
    fn test_declared_field_is_empty_map() {
        let entity = TestEntity::new().with_field("annotation");
        assert!(entity.string_map_property("annotation").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_field() {
        let entity = TestEntity::new();
        assert_eq!(
            entity.string_map_property("label").unwrap_err(),
            PropertyError::unknown_field("label")
        );
    }

    #[test]
    fn test_unavailable_field_wins() {
        let entity = TestEntity::new()
            .with("label", "app", "web")
            .unavailable("label", "cache cold");
        assert_eq!(
            entity.string_map_property("label").unwrap_err(),
            PropertyError::unavailable("label", "cache cold")
        );
    }

    #[test]
    fn test_predicate_against_entity() {
        let entity = TestEntity::new().with("label", "app", "frontend-worker");
        let sink = RecordingSink::new();

        let filter = StringMapPredicate::<TestEntity>::value_starts_with("label", "app", "front");
        assert!(filter.matches_with(&entity, &sink));

        let filter = StringMapPredicate::<TestEntity>::has_key("annotation", "owner");
        assert!(!filter.matches_with(&entity, &sink));
        assert_eq!(sink.len(), 1);
    }
}
