//! Typed pattern values for scoped resolution.
//!
//! The surrounding system addresses capabilities with `::`-delimited,
//! conventionally upper-cased names like `BILLING::INVOICES::CREATE`. This
//! module is the only place where those raw strings are interpreted: parsing
//! and case normalization happen here, once, and resolution downstream works
//! on `[ScopeName]` slices.

use crate::error::PatternError;
use std::fmt;
use std::str::FromStr;

/// The segment delimiter used in pattern strings.
pub const DELIMITER: &str = "::";

/// A single case-normalized scope segment.
///
/// Scope names are compared case-insensitively throughout the registry;
/// normalization to uppercase happens at construction so equality and
/// hashing need no special casing afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeName(String);

impl ScopeName {
    /// Parse and normalize a scope name.
    ///
    /// Rejects empty names and names containing the [`DELIMITER`] (a scope
    /// name with an embedded delimiter could never be matched by the
    /// segment-wise resolution walk).
    pub fn new(name: &str) -> Result<Self, PatternError> {
        if name.is_empty() {
            return Err(PatternError::Empty);
        }
        if name.contains(DELIMITER) {
            return Err(PatternError::DelimiterInScopeName(name.to_string()));
        }
        Ok(Self(name.to_uppercase()))
    }

    /// The normalized form of the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ScopeName {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ScopeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A parsed, normalized capability pattern: one or more scope segments.
///
/// A pattern's leading segments address a path through the scope tree and
/// its trailing segments form the local key at the destination, but the
/// pattern itself is just the segment list; the split is re-derived at each
/// node during resolution.
///
/// # Example
///
/// ```rust
/// use regtree_core::Pattern;
///
/// let pattern = Pattern::parse("billing::invoices::Create").unwrap();
/// assert_eq!(pattern.to_string(), "BILLING::INVOICES::CREATE");
/// assert_eq!(pattern.segments().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    segments: Vec<ScopeName>,
}

impl Pattern {
    /// Parse a raw pattern string into normalized segments.
    ///
    /// Fails on empty input and on empty segments (`"A::::B"`); both are
    /// registration-time programmer errors, not resolvable lookups.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if raw.is_empty() {
            return Err(PatternError::Empty);
        }
        let mut segments = Vec::new();
        for (index, segment) in raw.split(DELIMITER).enumerate() {
            if segment.is_empty() {
                return Err(PatternError::EmptySegment { index });
            }
            segments.push(ScopeName(segment.to_uppercase()));
        }
        Ok(Self { segments })
    }

    /// The normalized segments, in order.
    pub fn segments(&self) -> &[ScopeName] {
        &self.segments
    }

    /// The leading segment.
    pub fn first(&self) -> &ScopeName {
        // Invariant: parse rejects empty input, so segments is never empty.
        &self.segments[0]
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; kept for `len`/`is_empty` pairing convention.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Render a segment slice back into canonical string form.
    ///
    /// Used for diagnostics and error messages; resolution never needs it.
    pub fn join(segments: &[ScopeName]) -> String {
        let parts: Vec<&str> = segments.iter().map(ScopeName::as_str).collect();
        parts.join(DELIMITER)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Self::join(&self.segments))
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
