//! Diagnostics — the side channel for evaluation failures
//!
//! Matching never returns an error. When a predicate cannot evaluate an
//! entity it reports a [`Diagnostic`] to a [`DiagnosticSink`] and returns
//! `false`. The sink is fire-and-forget: nothing it does can change the
//! match result.
//!
//! - [`TracingSink`] — default; forwards to `tracing` at error level
//! - [`RecordingSink`] — collects diagnostics for inspection
//! - [`NullSink`] — discards

use crate::PropertyError;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

/// A failure observed while evaluating a predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The entity could not produce the requested map attribute.
    LookupFailed {
        /// The field the predicate asked for.
        field: String,
        /// The entity's error.
        error: PropertyError,
    },
    /// The predicate carries an op tag outside the supported set.
    ///
    /// This is a bug in whatever built the predicate, not a bad query.
    UnhandledOp {
        /// The raw op tag.
        op: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LookupFailed { field, error } => write!(
                f,
                "Filter: StringMapProperty: could not retrieve field {field}: {error}"
            ),
            Self::UnhandledOp { op } => write!(
                f,
                "Filter: StringMapProperty: Unhandled filter op. This is a filter \
                 implementation error and requires immediate patching. Op: {op}"
            ),
        }
    }
}

/// Receives diagnostics from predicate evaluation.
///
/// Implementations must not block and must be safe to call from many
/// threads at once.
pub trait DiagnosticSink: Send + Sync {
    /// Report a diagnostic.
    fn emit(&self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn emit(&self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// Forwards diagnostics to `tracing` as error events.
///
/// Used by [`Filter::matches`](crate::Filter::matches). Installing a
/// subscriber is up to the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::LookupFailed { field, .. } => {
                tracing::error!(target: "allocfilter::filter", field = %field, "{diagnostic}");
            }
            Diagnostic::UnhandledOp { op } => {
                tracing::error!(target: "allocfilter::filter", op = %op, "{diagnostic}");
            }
        }
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _diagnostic: Diagnostic) {}
}

/// Collects diagnostics in memory.
///
/// # Example
///
/// ```
/// use allocfilter::{Diagnostic, DiagnosticSink, RecordingSink};
///
/// let sink = RecordingSink::new();
/// sink.emit(Diagnostic::UnhandledOp { op: "bogus".into() });
/// assert_eq!(sink.len(), 1);
/// assert_eq!(sink.take().len(), 1);
/// assert!(sink.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct RecordingSink {
    recorded: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of diagnostics recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the recorded diagnostics, in emission order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Remove and return the recorded diagnostics.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    // A panic while pushing cannot leave the Vec half-written, so a poisoned
    // lock still holds valid data.
    fn lock(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.recorded
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.lock().push(diagnostic);
    }
}
