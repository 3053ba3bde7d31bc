//! Evaluation trace types for debugging predicate behavior.
//!
//! [`StringMapPredicate::explain`](crate::StringMapPredicate::explain)
//! returns a [`MatchTrace`]: the same result as `matches_with`, plus what the
//! predicate actually saw on the entity.
//!
//! # Example
//!
//! ```ignore
//! let trace = predicate.explain(&allocation, &TracingSink);
//! println!("{}: {} ({:?})", trace.predicate, trace.matched, trace.outcome);
//! ```

use crate::PropertyError;
use std::fmt;

/// What the predicate found when it looked up its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The entity could not produce the field.
    LookupFailed {
        /// The entity's error.
        error: PropertyError,
    },
    /// The field was produced but the key is not in it.
    KeyAbsent,
    /// The key is present with this value (possibly empty).
    KeyPresent {
        /// The looked-up value.
        value: String,
    },
    /// The predicate's op is not one of the supported ops.
    UnhandledOp,
}

/// Trace of a single predicate evaluation.
///
/// # INV: `matched` == `matches_with()` result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTrace {
    /// Whether the predicate matched.
    pub matched: bool,
    /// Canonical rendering of the predicate.
    pub predicate: String,
    /// What the lookup produced.
    pub outcome: MatchOutcome,
}

impl fmt::Display for MatchTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.matched { "match" } else { "no match" };
        write!(f, "{} => {verdict}", self.predicate)?;
        match &self.outcome {
            MatchOutcome::LookupFailed { error } => write!(f, " (lookup failed: {error})"),
            MatchOutcome::KeyAbsent => f.write_str(" (key absent)"),
            MatchOutcome::KeyPresent { value } => write!(f, " (value \"{value}\")"),
            MatchOutcome::UnhandledOp => f.write_str(" (unhandled op)"),
        }
    }
}
