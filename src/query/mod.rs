//! Compact path queries over a value tree.
//!
//! # Syntax
//!
//! A query is a run of segments, `(.<key>|[<digits>])*`:
//!
//! - `.key` - entry of a dict; the key runs to the next `.`, `[`, or the end
//! - `[n]` - zero-based item of an array
//! - the empty query - the root itself
//!
//! Keys cannot contain `.`, `[` or `]`; there is no escaping.
//!
//! # Examples
//!
//! ```
//! // .servers[0].host - host of the first server
//! // [2]              - third item of a top-level sequence
//! // .a.b.c           - nested dict lookups
//! ```
//!
//! Failures of any kind are reported to the [`Diagnostics`] and come back as
//! `None`.

pub mod error;
pub mod evaluator;
pub mod policy;
pub mod validator;

pub use error::QueryError;
pub use evaluator::{Evaluator, Found};
pub use policy::DuplicateKeyPolicy;
pub use validator::validate;

use crate::diagnostics::Diagnostics;
use crate::document::node::Value;

/// Validates and evaluates `query` against `tree`.
///
/// `Some(Found::Absent)` means the query named a dict entry that has no
/// value; `None` means the query was rejected or did not resolve.
///
/// # Example
///
/// ```
/// use yamlpick::diagnostics::Diagnostics;
/// use yamlpick::document::parser::parse_str;
/// use yamlpick::query::{get, DuplicateKeyPolicy};
///
/// let mut diagnostics = Diagnostics::new();
/// let tree = parse_str("a:\n  - 1\n  - 2\nb: 3", &mut diagnostics).unwrap();
///
/// let found = get(tree.as_ref(), ".a[1]", DuplicateKeyPolicy::First, &mut diagnostics);
/// assert_eq!(found.and_then(|f| f.as_str()), Some("2"));
///
/// assert!(get(tree.as_ref(), ".c", DuplicateKeyPolicy::First, &mut diagnostics).is_none());
/// ```
pub fn get<'a>(
    tree: Option<&'a Value>,
    query: &str,
    policy: DuplicateKeyPolicy,
    diagnostics: &mut Diagnostics,
) -> Option<Found<'a>> {
    let Some(tree) = tree else {
        diagnostics.warn(QueryError::MissingTree.to_string());
        return None;
    };
    if !validate(query, diagnostics) {
        return None;
    }

    match Evaluator::new(tree, policy).fetch(query) {
        Ok(found) => Some(found),
        Err(err) => {
            diagnostics.warn(err.to_string());
            None
        }
    }
}

/// Like [`get`], but only succeeds when the query resolves to a string.
pub fn getstr<'a>(
    tree: Option<&'a Value>,
    query: &str,
    policy: DuplicateKeyPolicy,
    diagnostics: &mut Diagnostics,
) -> Option<&'a str> {
    get(tree, query, policy, diagnostics)?.as_str()
}
