//! `StringMapPredicate` — leaf filter over a string-map attribute
//!
//! Selects one map-valued attribute of an entity by field name (`label`,
//! `annotation`, ...), looks up a key in it, and applies a [`StringMapOp`].

use crate::{
    Diagnostic, DiagnosticSink, Filter, MatchOutcome, MatchTrace, StringMapOp,
    StringMapProperties, UNALLOCATED_SUFFIX,
};
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A leaf predicate: `op` applied to `entity.<field>[<key>]` and `value`.
///
/// Immutable once built. Two predicates are equal iff field, op, key and
/// value are identical; no normalization is applied.
///
/// # Semantics
///
/// | Op           | Key absent                      | Key → `""`                      | Key → `v`             |
/// |--------------|---------------------------------|---------------------------------|-----------------------|
/// | `HasKey`     | false                           | true                            | true                  |
/// | `Equals`     | `value == "__unallocated__"`    | `value == "__unallocated__"`    | `v == value`          |
/// | `StartsWith` | false                           | `value == ""`                   | `v.starts_with(value)`|
///
/// If the entity cannot produce the field the predicate fails closed: it
/// reports a [`Diagnostic::LookupFailed`] and returns `false`.
///
/// # Example
///
/// ```
/// use allocfilter::prelude::*;
/// use std::borrow::Cow;
///
/// struct Asset { labels: StringMap }
///
/// impl StringMapProperties for Asset {
///     fn string_map_property(&self, field: &str) -> Result<Cow<'_, StringMap>, PropertyError> {
///         match field {
///             "label" => Ok(Cow::Borrowed(&self.labels)),
///             _ => Err(PropertyError::unknown_field(field)),
///         }
///     }
/// }
///
/// let asset = Asset {
///     labels: StringMap::from([("app".to_string(), "frontend-worker".to_string())]),
/// };
///
/// assert!(StringMapPredicate::<Asset>::has_key("label", "app").matches(&asset));
/// assert!(StringMapPredicate::<Asset>::value_starts_with("label", "app", "front").matches(&asset));
/// assert!(!StringMapPredicate::<Asset>::value_equals("label", "app", "frontend").matches(&asset));
/// ```
pub struct StringMapPredicate<E> {
    field: String,
    op: StringMapOp,
    key: String,
    value: String,
    // fn(&E): Send + Sync + Clone regardless of E.
    entity: PhantomData<fn(&E)>,
}

impl<E> StringMapPredicate<E> {
    /// Create a predicate from all four parts.
    ///
    /// No validation happens here; use
    /// [`StringMapOp::from_str`](std::str::FromStr) or the config layer for
    /// untrusted input.
    pub fn new(
        field: impl Into<String>,
        op: StringMapOp,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            op,
            key: key.into(),
            value: value.into(),
            entity: PhantomData,
        }
    }

    /// `field[key]` exists, whatever its value.
    pub fn has_key(field: impl Into<String>, key: impl Into<String>) -> Self {
        Self::new(field, StringMapOp::HasKey, key, "")
    }

    /// `field[key] == value`, with the unallocated rule.
    pub fn value_equals(
        field: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(field, StringMapOp::Equals, key, value)
    }

    /// `field[key]` exists and starts with `prefix`.
    pub fn value_starts_with(
        field: impl Into<String>,
        key: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self::new(field, StringMapOp::StartsWith, key, prefix)
    }

    /// The map attribute this predicate inspects.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The comparison applied.
    #[must_use]
    pub fn op(&self) -> &StringMapOp {
        &self.op
    }

    /// The map key looked up.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The comparison value. Ignored by `HasKey`.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Apply the op to the looked-up value (`None` = key absent).
    fn compare(&self, actual: Option<&str>, sink: &dyn DiagnosticSink) -> bool {
        match &self.op {
            StringMapOp::HasKey => actual.is_some(),
            // namespace:"__unallocated__" matches namespace = "" and a missing key alike.
            StringMapOp::Equals => match actual {
                None | Some("") => self.value == UNALLOCATED_SUFFIX,
                Some(actual) => actual == self.value,
            },
            // No unallocated rule: an unallocated query never carries a wildcard.
            StringMapOp::StartsWith => {
                actual.is_some_and(|actual| actual.starts_with(self.value.as_str()))
            }
            StringMapOp::Unrecognized(op) => {
                sink.emit(Diagnostic::UnhandledOp { op: op.clone() });
                false
            }
        }
    }
}

impl<E: StringMapProperties> StringMapPredicate<E> {
    /// Evaluate with a full account of how the result was reached.
    ///
    /// Emits the same diagnostics as [`Filter::matches_with`], and
    /// `trace.matched` always equals its result.
    pub fn explain(&self, entity: &E, sink: &dyn DiagnosticSink) -> MatchTrace {
        let (matched, outcome) = match entity.string_map_property(&self.field) {
            Err(error) => {
                sink.emit(Diagnostic::LookupFailed {
                    field: self.field.clone(),
                    error: error.clone(),
                });
                (false, MatchOutcome::LookupFailed { error })
            }
            Ok(map) => {
                let actual = map.get(&self.key).map(String::as_str);
                let matched = self.compare(actual, sink);
                let outcome = match (&self.op, actual) {
                    (StringMapOp::Unrecognized(_), _) => MatchOutcome::UnhandledOp,
                    (_, None) => MatchOutcome::KeyAbsent,
                    (_, Some(value)) => MatchOutcome::KeyPresent {
                        value: value.to_string(),
                    },
                };
                (matched, outcome)
            }
        };

        MatchTrace {
            matched,
            predicate: self.to_string(),
            outcome,
        }
    }
}

impl<E: StringMapProperties + 'static> Filter<E> for StringMapPredicate<E> {
    // Leaves have nothing to simplify.
    fn flattened(&self) -> Box<dyn Filter<E>> {
        Box::new(self.clone())
    }

    fn equals(&self, other: &dyn Filter<E>) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    fn matches_with(&self, entity: &E, sink: &dyn DiagnosticSink) -> bool {
        let map = match entity.string_map_property(&self.field) {
            Ok(map) => map,
            Err(error) => {
                sink.emit(Diagnostic::LookupFailed {
                    field: self.field.clone(),
                    error,
                });
                return false;
            }
        };

        self.compare(map.get(&self.key).map(String::as_str), sink)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<E> fmt::Display for StringMapPredicate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {}[{}] \"{}\")",
            self.op, self.field, self.key, self.value
        )
    }
}

impl<E> fmt::Debug for StringMapPredicate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringMapPredicate")
            .field("field", &self.field)
            .field("op", &self.op)
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

// Manual impls: derives would demand `E: Clone` / `E: PartialEq` / `E: Hash`.

impl<E> Clone for StringMapPredicate<E> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            op: self.op.clone(),
            key: self.key.clone(),
            value: self.value.clone(),
            entity: PhantomData,
        }
    }
}

impl<E> PartialEq for StringMapPredicate<E> {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field
            && self.op == other.op
            && self.key == other.key
            && self.value == other.value
    }
}

impl<E> Eq for StringMapPredicate<E> {}

impl<E> Hash for StringMapPredicate<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
        self.op.hash(state);
        self.key.hash(state);
        self.value.hash(state);
    }
}
