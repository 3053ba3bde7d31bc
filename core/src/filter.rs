//! `Filter` — the protocol every filter-tree node speaks
//!
//! Leaves (like [`StringMapPredicate`](crate::StringMapPredicate)) and
//! combinators (AND/OR/NOT, built elsewhere) share this trait so they can be
//! nested freely. A combinator may treat its children as opaque beyond these
//! operations.

use crate::{DiagnosticSink, TracingSink};
use std::any::Any;
use std::fmt;

/// A node in a boolean filter tree over entities of type `E`.
///
/// # Operations
///
/// - [`Display`](fmt::Display) — canonical, deterministic rendering for logs.
///   Structurally equal nodes render identically. It is not a parse format.
/// - [`flattened`](Self::flattened) — simplified copy of the tree. Identity
///   for leaves.
/// - [`equals`](Self::equals) — structural equality across node kinds.
/// - [`matches`](Self::matches) — evaluate against one entity.
///
/// # Thread Safety
///
/// Nodes are immutable after construction and must be `Send + Sync`, so one
/// tree can be evaluated against many entities concurrently.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Filter<{E}>`",
    label = "this type is not a filter node over `{E}`",
    note = "filter nodes need `Display`, `flattened`, `equals`, `matches_with` and `as_any`"
)]
pub trait Filter<E>: fmt::Display + fmt::Debug + Send + Sync + 'static {
    /// Return a simplified copy of this node.
    fn flattened(&self) -> Box<dyn Filter<E>>;

    /// Structural equality with another node.
    ///
    /// Returns `false` whenever `other` is a different node kind.
    fn equals(&self, other: &dyn Filter<E>) -> bool;

    /// Evaluate against `entity`, reporting failures to `sink`.
    fn matches_with(&self, entity: &E, sink: &dyn DiagnosticSink) -> bool;

    /// Evaluate against `entity`, reporting failures through `tracing`.
    fn matches(&self, entity: &E) -> bool {
        self.matches_with(entity, &TracingSink)
    }

    /// Upcast for downcasting in [`equals`](Self::equals).
    fn as_any(&self) -> &dyn Any;
}

impl<E: 'static> PartialEq for dyn Filter<E> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<E: 'static> Filter<E> for Box<dyn Filter<E>> {
    fn flattened(&self) -> Box<dyn Filter<E>> {
        (**self).flattened()
    }

    fn equals(&self, other: &dyn Filter<E>) -> bool {
        (**self).equals(other)
    }

    fn matches_with(&self, entity: &E, sink: &dyn DiagnosticSink) -> bool {
        (**self).matches_with(entity, sink)
    }

    fn matches(&self, entity: &E) -> bool {
        (**self).matches(entity)
    }

    // Expose the inner node so boxed and unboxed nodes compare equal.
    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }
}
