//! Diagnostics channel for the builder and the query engine.
//!
//! Every recoverable problem (skipped tokens, grammar mismatches, rejected
//! queries, failed lookups) is recorded here in order, and mirrored through
//! `tracing` so a subscriber can surface it. Callers that only care about
//! the result can ignore the collector; tests inspect it.
//!
//! # Example
//!
//! ```
//! use yamlpick::diagnostics::Diagnostics;
//!
//! let mut diagnostics = Diagnostics::new();
//! diagnostics.warn("skipping token type YAML_ANCHOR_TOKEN");
//! assert_eq!(diagnostics.len(), 1);
//! assert!(diagnostics.contains("YAML_ANCHOR_TOKEN"));
//! ```

use std::fmt;

/// A single reported problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warn: {}", self.message)
    }
}

/// Ordered collection of diagnostics produced by one or more operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a problem and forwards it to `tracing` at warn level.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{}", message);
        self.entries.push(Diagnostic { message });
    }

    /// Notes something unremarkable; goes to `tracing` only.
    pub fn trace(&self, message: impl AsRef<str>) {
        tracing::trace!("{}", message.as_ref());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if any recorded message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|d| d.message.contains(needle))
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.entries)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
