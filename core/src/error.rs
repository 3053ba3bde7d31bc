//! Error types for predicate construction and entity lookup.
//!
//! Neither error ever escapes [`Filter::matches`](crate::Filter::matches):
//! lookup failures are reported through a [`DiagnosticSink`](crate::DiagnosticSink)
//! and the predicate fails closed.

use thiserror::Error;

/// Errors from building a predicate out of untrusted input (config, parsers).
///
/// Caught at construction time, not evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The operator tag is not one of the supported string-map operations.
    #[error(
        "unknown string map op \"{tag}\" — expected one of stringmapcontains, \
         stringmapequals, stringmapstartswith"
    )]
    UnknownOp {
        /// The rejected tag.
        tag: String,
    },
    /// The field selector is empty.
    #[error("string map predicate has an empty field name")]
    EmptyField,
    /// The map key is empty.
    #[error("string map predicate on field \"{field}\" has an empty key")]
    EmptyKey {
        /// The field the key was meant for.
        field: String,
    },
}

/// Errors an entity reports when it cannot produce a map attribute.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The entity has no map-valued attribute with this name.
    #[error("unknown string map field \"{field}\"")]
    UnknownField {
        /// The requested field name.
        field: String,
    },
    /// The attribute exists but its data is not available.
    #[error("string map field \"{field}\" is unavailable: {reason}")]
    Unavailable {
        /// The requested field name.
        field: String,
        /// Why the data could not be produced.
        reason: String,
    },
}

impl PropertyError {
    /// Shorthand for [`PropertyError::UnknownField`].
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Shorthand for [`PropertyError::Unavailable`].
    pub fn unavailable(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
