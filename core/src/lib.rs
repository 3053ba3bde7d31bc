//! allocfilter - typed filter predicates for cost-allocation entities
//!
//! Leaf predicates that match a domain entity against a condition over one
//! of its string-keyed, string-valued map attributes (labels, annotations).
//!
//! # Architecture
//!
//! - [`StringMapProperties`] — Entity capability: produce a map attribute by field name
//! - [`StringMapOp`] — Operator tag (`HasKey`, `Equals`, `StartsWith`)
//! - [`StringMapPredicate<E>`] — Leaf node: field + op + key + value
//! - [`Filter<E>`] — Tree protocol shared with combinator nodes
//! - [`DiagnosticSink`] — Side channel for evaluation failures
//!
//! # Key Design Insights
//!
//! 1. **Fail closed**: an entity whose attribute cannot be retrieved never
//!    matches. `matches` only ever returns a `bool`.
//!
//! 2. **Unallocated sentinel**: the domain models "no value" as an absent key
//!    or the empty string. `Equals` against [`UNALLOCATED_SUFFIX`] matches
//!    both; `HasKey` and `StartsWith` do not special-case it.
//!
//! 3. **Leaves are flat**: `flattened()` on a leaf is the identity.
//!
//! # Example
//!
//! ```
//! use allocfilter::prelude::*;
//! use std::borrow::Cow;
//!
//! #[derive(Debug)]
//! struct Allocation { labels: StringMap }
//!
//! impl StringMapProperties for Allocation {
//!     fn string_map_property(&self, field: &str) -> Result<Cow<'_, StringMap>, PropertyError> {
//!         match field {
//!             "label" => Ok(Cow::Borrowed(&self.labels)),
//!             _ => Err(PropertyError::unknown_field(field)),
//!         }
//!     }
//! }
//!
//! let alloc = Allocation {
//!     labels: StringMap::from([("app".to_string(), "frontend".to_string())]),
//! };
//!
//! let filter = StringMapPredicate::<Allocation>::value_equals("label", "app", "frontend");
//! assert_eq!(filter.to_string(), r#"(stringmapequals label[app] "frontend")"#);
//! assert!(filter.matches(&alloc));
//!
//! let unallocated = StringMapPredicate::<Allocation>::value_equals("label", "team", UNALLOCATED_SUFFIX);
//! assert!(unallocated.matches(&alloc));
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod diagnostic;
mod error;
mod filter;
mod op;
mod property;
mod string_map;
mod trace;

#[cfg(feature = "serde")]
mod config;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use diagnostic::{Diagnostic, DiagnosticSink, NullSink, RecordingSink, TracingSink};
pub use error::{FilterError, PropertyError};
pub use filter::Filter;
pub use op::StringMapOp;
pub use property::{StringMap, StringMapProperties};
pub use string_map::StringMapPredicate;
pub use trace::{MatchOutcome, MatchTrace};

#[cfg(feature = "serde")]
pub use config::StringMapPredicateConfig;

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use allocfilter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Diagnostics
        Diagnostic,
        DiagnosticSink,
        // Core types
        Filter,
        // Errors
        FilterError,
        MatchOutcome,
        MatchTrace,
        PropertyError,
        RecordingSink,
        StringMap,
        StringMapOp,
        StringMapPredicate,
        StringMapProperties,
        TracingSink,
        UNALLOCATED_SUFFIX,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Reserved token for "this attribute has no assigned value".
///
/// An `Equals` predicate whose value is this token matches entities where the
/// key is absent or mapped to the empty string.
pub const UNALLOCATED_SUFFIX: &str = "__unallocated__";
