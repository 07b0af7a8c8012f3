//! Error types for regtree.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`RegistryError`] - configuration and wiring errors from registry operations
//! - [`PatternError`] - malformed pattern or scope name input
//! - [`DispatchError`] - aggregated handler failures from a dispatch call
//!
//! Absence is never an error here: a pattern with no registered handlers
//! resolves to an empty list, and unregistering something that was never
//! registered is an already-satisfied success.

use crate::pattern::{Pattern, ScopeName};
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Malformed pattern or scope name input.
///
/// These are programmer errors surfaced synchronously at the call that
/// supplied the bad string, not recoverable runtime conditions.
#[derive(Error, Debug)]
pub enum PatternError {
    /// The pattern or scope name was empty.
    #[error("empty pattern")]
    Empty,

    /// A pattern contained an empty segment, e.g. `A::::B`.
    #[error("empty segment at position {index}")]
    EmptySegment {
        /// Zero-based index of the offending segment.
        index: usize,
    },

    /// A scope name contained the `::` delimiter.
    #[error("scope name contains the `::` delimiter: {0}")]
    DelimiterInScopeName(String),
}

/// Configuration and wiring errors from registry operations.
///
/// All variants indicate misuse detected at registration or attachment
/// time. They are expected to surface during startup wiring, not in
/// steady-state operation.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A child scope with this name is already attached to the parent.
    ///
    /// The existing mapping is left untouched.
    #[error("duplicate child scope: {0}")]
    DuplicateScope(ScopeName),

    /// The child being attached already has a live parent.
    #[error("scope {child} is already attached under {parent}")]
    AlreadyAttached {
        /// The child that was being attached.
        child: ScopeName,
        /// Domain path of its current parent.
        parent: String,
    },

    /// Attaching the child would make the tree cyclic.
    #[error("attaching {child} under {parent} would create a cycle")]
    WouldCycle {
        /// The child that was being attached.
        child: ScopeName,
        /// The scope it was being attached to.
        parent: ScopeName,
    },

    /// The name given to `attach_child` does not match the child's own
    /// scope name. Resolution descends by the child's own name, so a
    /// mismatched table key could never be matched.
    #[error("attach name {given} does not match child scope name {actual}")]
    ScopeNameMismatch {
        /// The name supplied to `attach_child`.
        given: ScopeName,
        /// The child's actual scope name.
        actual: ScopeName,
    },

    /// The pattern names only the registering scope itself, leaving no
    /// local key to store the handler under.
    #[error("pattern {pattern} names only scope {scope} and has no local key")]
    ScopeOnlyPattern {
        /// The offending pattern, in canonical form.
        pattern: String,
        /// The scope the registration was attempted on.
        scope: ScopeName,
    },

    /// The supplied pattern or scope name string was malformed.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// One or more handlers failed during a dispatch call.
///
/// Dispatch invokes every resolved handler and aggregates the failures
/// rather than stopping at the first, mirroring fan-out listener
/// semantics: one listener's failure must not starve its siblings.
#[derive(Error, Debug)]
#[error("{} of {total} handlers failed for pattern {pattern}", .failures.len())]
pub struct DispatchError {
    /// Canonical form of the dispatched pattern.
    pub pattern: String,
    /// Number of handlers that were invoked.
    pub total: usize,
    /// Every failure, in invocation order.
    pub failures: Vec<BoxError>,
}

impl DispatchError {
    /// Build an aggregate error for a dispatched segment list.
    pub fn aggregate(segments: &[ScopeName], total: usize, failures: Vec<BoxError>) -> Self {
        Self {
            pattern: Pattern::join(segments),
            total,
            failures,
        }
    }
}
