//! One-pass syntax check over a query string.

use super::error::QueryError;
use crate::diagnostics::Diagnostics;

/// Result of a successful syntax check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Complete,
    /// The query ends inside an unclosed `[`. Accepted, but worth a warning.
    Unclosed,
}

/// Checks bracket structure and index characters, left to right.
///
/// Brackets may not nest, may not be empty, and may only hold decimal
/// digits; every `]` must close an open `[`.
pub fn check(query: &str) -> Result<Validation, QueryError> {
    let mut in_index = false;
    let mut chars = query.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '[' => {
                if in_index {
                    return Err(QueryError::NestedBracket);
                }
                in_index = true;
                if chars.peek() == Some(&']') {
                    return Err(QueryError::EmptyIndex);
                }
            }
            ']' => {
                if !in_index {
                    return Err(QueryError::UnexpectedClose);
                }
                in_index = false;
            }
            c if in_index && !c.is_ascii_digit() => {
                return Err(QueryError::InvalidIndexCharacter(c));
            }
            _ => {}
        }
    }

    Ok(if in_index {
        Validation::Unclosed
    } else {
        Validation::Complete
    })
}

/// Validates `query`, reporting problems to `diagnostics`.
///
/// A query that merely ends inside an open `[` is reported but still
/// passes; evaluation will then fail on its own.
///
/// # Example
///
/// ```
/// use yamlpick::diagnostics::Diagnostics;
/// use yamlpick::query::validate;
///
/// let mut diagnostics = Diagnostics::new();
/// assert!(validate(".servers[0].host", &mut diagnostics));
/// assert!(!validate(".servers[]", &mut diagnostics));
/// ```
pub fn validate(query: &str, diagnostics: &mut Diagnostics) -> bool {
    match check(query) {
        Ok(Validation::Complete) => true,
        Ok(Validation::Unclosed) => {
            diagnostics.warn(QueryError::UnclosedIndex.to_string());
            true
        }
        Err(err) => {
            diagnostics.warn(err.to_string());
            false
        }
    }
}
