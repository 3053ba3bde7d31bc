//! Config type for string-map predicate construction.
//!
//! [`StringMapPredicateConfig`] mirrors [`StringMapPredicate`] but is
//! serde-(de)serializable. It is the round-trip format for predicates; the
//! `Display` rendering is not.
//!
//! ```json
//! { "field": "label", "op": "stringmapequals", "key": "app", "value": "frontend" }
//! ```
//!
//! Building validates the op tag, so configs never produce
//! [`StringMapOp::Unrecognized`].

use crate::{FilterError, StringMapOp, StringMapPredicate};
use serde::{Deserialize, Serialize};

/// Configuration for a [`StringMapPredicate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringMapPredicateConfig {
    /// The map attribute to inspect (`label`, `annotation`, ...).
    pub field: String,

    /// Op tag: `stringmapcontains`, `stringmapequals` or `stringmapstartswith`.
    pub op: String,

    /// The map key to look up.
    pub key: String,

    /// Comparison value. Optional for `stringmapcontains`.
    #[serde(default)]
    pub value: String,
}

impl StringMapPredicateConfig {
    /// Validate and build a runtime predicate.
    ///
    /// # Errors
    ///
    /// - [`FilterError::UnknownOp`] if `op` is not a supported tag
    /// - [`FilterError::EmptyField`] if `field` is empty
    /// - [`FilterError::EmptyKey`] if `key` is empty
    pub fn build<E>(&self) -> Result<StringMapPredicate<E>, FilterError> {
        let op: StringMapOp = self.op.parse()?;
        if self.field.is_empty() {
            return Err(FilterError::EmptyField);
        }
        if self.key.is_empty() {
            return Err(FilterError::EmptyKey {
                field: self.field.clone(),
            });
        }
        Ok(StringMapPredicate::new(
            self.field.as_str(),
            op,
            self.key.as_str(),
            self.value.as_str(),
        ))
    }
}

impl<E> TryFrom<StringMapPredicateConfig> for StringMapPredicate<E> {
    type Error = FilterError;

    fn try_from(config: StringMapPredicateConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}

impl<E> From<&StringMapPredicate<E>> for StringMapPredicateConfig {
    fn from(predicate: &StringMapPredicate<E>) -> Self {
        Self {
            field: predicate.field().to_string(),
            op: predicate.op().tag().to_string(),
            key: predicate.key().to_string(),
            value: predicate.value().to_string(),
        }
    }
}
