//! Type-directed walk of a value tree along a query.
//!
//! Each recursion level consumes one segment: `[n]` on an array, `.key` on a
//! dict. The walk fails fast on the first segment that does not fit the node
//! it meets; an empty remainder is the only way to succeed.

use super::error::QueryError;
use super::policy::DuplicateKeyPolicy;
use crate::document::node::{Entry, Value};

/// What a query resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found<'a> {
    Value(&'a Value),
    /// The query ended on a dict entry that has a key but no value.
    Absent,
}

impl<'a> Found<'a> {
    pub fn value(&self) -> Option<&'a Value> {
        match *self {
            Found::Value(value) => Some(value),
            Found::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Found::Absent)
    }

    /// The string payload, if the query resolved to a string leaf.
    pub fn as_str(&self) -> Option<&'a str> {
        self.value().and_then(Value::as_str)
    }
}

pub struct Evaluator<'a> {
    root: &'a Value,
    policy: DuplicateKeyPolicy,
}

impl<'a> Evaluator<'a> {
    pub fn new(root: &'a Value, policy: DuplicateKeyPolicy) -> Self {
        Evaluator { root, policy }
    }

    /// Resolves `query` against the root.
    ///
    /// The query is expected to have passed validation; malformed index text
    /// still fails cleanly here, it is just reported less precisely.
    pub fn fetch(&self, query: &str) -> Result<Found<'a>, QueryError> {
        self.fetch_from(self.root, query)
    }

    fn fetch_from(&self, node: &'a Value, query: &str) -> Result<Found<'a>, QueryError> {
        if query.is_empty() {
            return Ok(Found::Value(node));
        }

        match node {
            Value::String(_) => Err(QueryError::TerminalNode {
                remaining: query.to_string(),
            }),
            Value::Array(items) => {
                let (index, rest) = split_index(query)?;
                let item = items.get(index).ok_or(QueryError::OutOfBounds {
                    index,
                    len: items.len(),
                })?;
                self.fetch_from(item, rest)
            }
            Value::Dict(entries) => {
                let (key, rest) = split_key(query)?;
                let entry = self.find_entry(entries, key)?;
                match &entry.value {
                    Some(value) => self.fetch_from(value, rest),
                    None if rest.is_empty() => Ok(Found::Absent),
                    None => Err(QueryError::AbsentValue {
                        key: key.to_string(),
                    }),
                }
            }
        }
    }

    fn find_entry(&self, entries: &'a [Entry], key: &str) -> Result<&'a Entry, QueryError> {
        let mut matched = None;
        for entry in entries.iter().filter(|entry| entry.key == key) {
            if self.policy == DuplicateKeyPolicy::Error && matched.is_some() {
                return Err(QueryError::DuplicateKey {
                    key: key.to_string(),
                });
            }
            matched = Some(entry);
            if self.policy == DuplicateKeyPolicy::First {
                break;
            }
        }
        matched.ok_or_else(|| QueryError::KeyNotFound {
            key: key.to_string(),
        })
    }
}

/// Splits `[digits]rest` into the index and `rest`.
///
/// Digits accumulate with wrapping arithmetic; an absurd index just fails the
/// bounds check afterwards.
fn split_index(query: &str) -> Result<(usize, &str), QueryError> {
    let inner = query
        .strip_prefix('[')
        .ok_or(QueryError::TypeMismatch { expected: "ARRAY" })?;
    let close = inner.find(']').ok_or(QueryError::UnclosedIndex)?;
    let digits = &inner[..close];
    if digits.is_empty() {
        return Err(QueryError::EmptyIndex);
    }

    let mut index: usize = 0;
    for c in digits.chars() {
        let digit = c
            .to_digit(10)
            .ok_or(QueryError::InvalidIndexCharacter(c))?;
        index = index.wrapping_mul(10).wrapping_add(digit as usize);
    }
    Ok((index, &inner[close + 1..]))
}

/// Splits `.key rest` at the next `.` or `[`.
fn split_key(query: &str) -> Result<(&str, &str), QueryError> {
    let inner = query
        .strip_prefix('.')
        .ok_or(QueryError::TypeMismatch { expected: "DICT" })?;
    let end = inner
        .find(|c: char| c == '.' || c == '[')
        .unwrap_or(inner.len());
    Ok(inner.split_at(end))
}
