//! `StringMapProperties` — the entity side of a string-map predicate
//!
//! This is the only coupling between a predicate and the domain entity it
//! filters. The predicate asks for a map by field name and performs no other
//! introspection.

use crate::PropertyError;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

/// A string-keyed, string-valued attribute map (labels, annotations, ...).
pub type StringMap = HashMap<String, String>;

/// Produces string-map attributes of an entity by field name.
///
/// # Contract
///
/// - Deterministic for a fixed entity snapshot.
/// - Unknown fields or unavailable data are reported as [`PropertyError`],
///   never by panicking.
/// - Safe for concurrent reads: predicates may evaluate the same entity from
///   several threads.
///
/// Return [`Cow::Borrowed`] when the entity owns the map, [`Cow::Owned`] when
/// it has to compute one.
///
/// # Example
///
/// ```
/// use allocfilter::{PropertyError, StringMap, StringMapProperties};
/// use std::borrow::Cow;
///
/// struct Pod { labels: StringMap, namespace: String }
///
/// impl StringMapProperties for Pod {
///     fn string_map_property(&self, field: &str) -> Result<Cow<'_, StringMap>, PropertyError> {
///         match field {
///             "label" => Ok(Cow::Borrowed(&self.labels)),
///             // Computed on demand.
///             "meta" => Ok(Cow::Owned(StringMap::from([
///                 ("namespace".to_string(), self.namespace.clone()),
///             ]))),
///             _ => Err(PropertyError::unknown_field(field)),
///         }
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `StringMapProperties`",
    label = "this type cannot be filtered by string-map predicates",
    note = "implement `string_map_property(&self, field: &str)` to expose labels, annotations, etc."
)]
pub trait StringMapProperties: Send + Sync {
    /// Return the map attribute named `field`.
    fn string_map_property(&self, field: &str) -> Result<Cow<'_, StringMap>, PropertyError>;
}

impl<T: StringMapProperties + ?Sized> StringMapProperties for &T {
    fn string_map_property(&self, field: &str) -> Result<Cow<'_, StringMap>, PropertyError> {
        (**self).string_map_property(field)
    }
}

impl<T: StringMapProperties + ?Sized> StringMapProperties for Box<T> {
    fn string_map_property(&self, field: &str) -> Result<Cow<'_, StringMap>, PropertyError> {
        (**self).string_map_property(field)
    }
}

impl<T: StringMapProperties + ?Sized> StringMapProperties for Arc<T> {
    fn string_map_property(&self, field: &str) -> Result<Cow<'_, StringMap>, PropertyError> {
        (**self).string_map_property(field)
    }
}
