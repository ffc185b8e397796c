//! Reasons a query is rejected or fails to resolve.

use std::fmt;

/// Errors that can occur while validating or evaluating a query.
///
/// These end up as diagnostic text; the public lookup functions collapse
/// them all into "nothing found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// There is no tree to query.
    MissingTree,
    /// A `[` appeared before the previous `[` was closed.
    NestedBracket,
    /// `[]` with no index inside.
    EmptyIndex,
    /// A `]` with no open `[`.
    UnexpectedClose,
    /// Something other than a decimal digit between brackets.
    InvalidIndexCharacter(char),
    /// An index was opened but never closed.
    UnclosedIndex,
    /// The walk reached a string while query text remained.
    TerminalNode { remaining: String },
    /// The query's next segment does not fit the node's type.
    TypeMismatch { expected: &'static str },
    /// The requested index is past the end of the array.
    OutOfBounds { index: usize, len: usize },
    /// The key matched more than once under the `error` policy.
    DuplicateKey { key: String },
    /// No entry has the key.
    KeyNotFound { key: String },
    /// The key matched an entry without a value, and the query continues.
    AbsentValue { key: String },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::MissingTree => write!(f, "no tree to query"),
            QueryError::NestedBracket => {
                write!(f, "query has mismatched delimiters ('[' inside '[')")
            }
            QueryError::EmptyIndex => write!(f, "query contains invalid subsequence []"),
            QueryError::UnexpectedClose => {
                write!(f, "query has mismatched delimiters (unexpected ']')")
            }
            QueryError::InvalidIndexCharacter(c) => {
                write!(f, "query has invalid character for array access '{}'", c)
            }
            QueryError::UnclosedIndex => {
                write!(f, "query is missing closing delimiter for array access")
            }
            QueryError::TerminalNode { remaining } => write!(
                f,
                "reached terminal node, but query is not exhausted ('{}' left)",
                remaining
            ),
            QueryError::TypeMismatch { expected } => write!(
                f,
                "type mismatch: expected {}, but query disagreed",
                expected
            ),
            QueryError::OutOfBounds { index, len } => write!(
                f,
                "index {} is beyond array bounds ({} elements)",
                index, len
            ),
            QueryError::DuplicateKey { key } => {
                write!(f, "duplicate matching keys in dict for {}", key)
            }
            QueryError::KeyNotFound { key } => write!(f, "no key '{}' in dict", key),
            QueryError::AbsentValue { key } => {
                write!(f, "key '{}' has no value, but query is not exhausted", key)
            }
        }
    }
}

impl std::error::Error for QueryError {}
