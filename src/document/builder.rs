//! Recursive-descent tree builder.
//!
//! [`TreeBuilder`] pulls tokens from a [`TokenSource`] and turns the next
//! semantic unit into a [`Value`]. Collections recurse back into
//! [`TreeBuilder::build_value`] for their children.
//!
//! Outcomes of one `build_value` call:
//!
//! - `Ok(Some(value))` - a complete node.
//! - `Ok(None)` - no node: the stream or the enclosing collection ended, or a
//!   grammar mismatch was reported to the diagnostics and the partial node
//!   was dropped.
//! - `Err(FatalError)` - the token source itself failed.
//!
//! Block and flow collections are handled alike, except where the token
//! grammar differs: a block sequence start is followed by its first `-`
//! entry token, which is consumed before any item is built; a flow sequence
//! start is not.
//!
//! Collections nest at most [`MAX_DEPTH`] levels. Opening one more is a
//! grammar failure that unwinds every enclosing collection, so the whole
//! document comes back as `Ok(None)`.
//!
//! # Example
//!
//! ```
//! use yamlpick::diagnostics::Diagnostics;
//! use yamlpick::document::builder::parse;
//! use yamlpick::document::scanner::YamlScanner;
//!
//! let mut diagnostics = Diagnostics::new();
//! let tree = parse(YamlScanner::new("a: [x, y]"), &mut diagnostics)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(tree.to_string(), r#"{"a": ["x", "y", ], }"#);
//! ```

use super::node::{Entry, Value};
use super::token::{Lookahead, ScanError, Token, TokenSource};
use crate::diagnostics::Diagnostics;
use crate::error::FatalError;

/// Deepest collection nesting the builder accepts.
pub const MAX_DEPTH: usize = 512;

/// Builds a whole document: skips to the stream start, then builds one value.
///
/// `Ok(None)` means an empty document, or a document whose structure could
/// not be built (see the diagnostics for which).
pub fn parse<S: TokenSource>(
    source: S,
    diagnostics: &mut Diagnostics,
) -> Result<Option<Value>, FatalError> {
    let mut builder = TreeBuilder::new(source, diagnostics);
    if builder.wait_for(&Token::StreamStart)? != Token::StreamStart {
        return Ok(None);
    }
    builder.build_value()
}

/// Outcome of looking for an entry's value marker.
enum ValueMarker {
    Found,
    /// The entry has no value; the token that says so is left in place.
    Missing,
    EndOfStream,
}

pub struct TreeBuilder<'d, S> {
    tokens: Lookahead<S>,
    diagnostics: &'d mut Diagnostics,
    depth: usize,
    too_deep: bool,
}

impl<'d, S: TokenSource> TreeBuilder<'d, S> {
    pub fn new(source: S, diagnostics: &'d mut Diagnostics) -> Self {
        Self {
            tokens: Lookahead::new(source),
            diagnostics,
            depth: 0,
            too_deep: false,
        }
    }

    /// Builds the next value from the stream.
    pub fn build_value(&mut self) -> Result<Option<Value>, FatalError> {
        loop {
            let token = self.next()?;
            match token {
                t if t.is_end() => return Ok(None),
                separator @ (Token::FlowEntry | Token::BlockEntry) => {
                    self.diagnostics.trace(format!("separator {}", separator));
                }
                Token::Scalar(text) => return Ok(Some(Value::String(text))),
                Token::BlockMappingStart | Token::FlowMappingStart => {
                    return self.nested(Self::build_dict)
                }
                Token::BlockSequenceStart => {
                    return self.nested(|builder| {
                        builder.wait_for(&Token::BlockEntry)?;
                        builder.build_array()
                    })
                }
                Token::FlowSequenceStart => return self.nested(Self::build_array),
                other => self.skip(&other),
            }
        }
    }

    /// Runs `build` one nesting level down, or fails once the bound is hit.
    fn nested(
        &mut self,
        build: fn(&mut Self) -> Result<Option<Value>, FatalError>,
    ) -> Result<Option<Value>, FatalError> {
        if self.depth == MAX_DEPTH {
            self.diagnostics
                .warn(format!("nesting deeper than {} levels", MAX_DEPTH));
            self.too_deep = true;
            return Ok(None);
        }
        self.depth += 1;
        let built = build(self);
        self.depth -= 1;
        built
    }

    fn build_array(&mut self) -> Result<Option<Value>, FatalError> {
        let mut items = Vec::new();
        while let Some(item) = self.build_value()? {
            items.push(item);
        }
        if self.too_deep {
            return Ok(None);
        }
        Ok(Some(Value::Array(items)))
    }

    fn build_dict(&mut self) -> Result<Option<Value>, FatalError> {
        let mut entries = Vec::new();

        loop {
            match self.next()? {
                t if t.is_mapping_end() => break,
                Token::FlowEntry => continue,
                Token::Key => {}
                other => {
                    self.diagnostics
                        .warn(format!("expected YAML_KEY_TOKEN, got {}", other));
                    return Ok(None);
                }
            }

            let key = match self.wait_for(&Token::Scalar(String::new()))? {
                Token::Scalar(text) => text,
                _ => {
                    self.diagnostics
                        .warn("stream ended while waiting for a key scalar");
                    return Ok(None);
                }
            };

            match self.wait_for_value_marker()? {
                ValueMarker::Found => {}
                ValueMarker::Missing => {
                    entries.push(Entry::new(key, None));
                    continue;
                }
                ValueMarker::EndOfStream => {
                    self.diagnostics
                        .warn(format!("stream ended while waiting for a value of '{}'", key));
                    return Ok(None);
                }
            }

            match self.tokens.peek()? {
                Token::Key => {
                    entries.push(Entry::new(key, None));
                    continue;
                }
                Token::FlowEntry => {
                    self.next()?;
                    entries.push(Entry::new(key, None));
                    continue;
                }
                Token::BlockEntry => {
                    let items = self.build_indentless_sequence()?;
                    if self.too_deep {
                        return Ok(None);
                    }
                    entries.push(Entry::new(key, Some(items)));
                    continue;
                }
                _ => {}
            }

            match self.build_value()? {
                Some(value) => entries.push(Entry::new(key, Some(value))),
                None if self.too_deep => return Ok(None),
                None => {
                    // The nested call already ate the closing token.
                    entries.push(Entry::new(key, None));
                    break;
                }
            }
        }

        Ok(Some(Value::Dict(entries)))
    }

    /// A block sequence written at the same indentation as its key has no
    /// sequence start or end token; it runs until the mapping's next key or
    /// its end, both of which are left for the mapping.
    fn build_indentless_sequence(&mut self) -> Result<Value, FatalError> {
        let mut items = Vec::new();
        while *self.tokens.peek()? == Token::BlockEntry {
            self.next()?;
            if matches!(
                self.tokens.peek()?,
                Token::BlockEntry | Token::Key | Token::BlockEnd
            ) {
                continue;
            }
            match self.build_value()? {
                Some(item) => items.push(item),
                None => break,
            }
        }
        Ok(Value::Array(items))
    }

    fn wait_for_value_marker(&mut self) -> Result<ValueMarker, FatalError> {
        loop {
            let token = self.tokens.peek()?;
            match token {
                Token::Value => {
                    self.next()?;
                    return Ok(ValueMarker::Found);
                }
                Token::StreamEnd => return Ok(ValueMarker::EndOfStream),
                t if *t == Token::Key || t.is_mapping_end() => return Ok(ValueMarker::Missing),
                Token::FlowEntry => {
                    self.next()?;
                }
                _ => {
                    let token = self.next()?;
                    self.skip(&token);
                }
            }
        }
    }

    /// Consumes tokens until one of the same kind as `target` or the end of
    /// the stream, and returns it.
    fn wait_for(&mut self, target: &Token) -> Result<Token, FatalError> {
        loop {
            let token = self.next()?;
            if token == Token::StreamEnd
                || std::mem::discriminant(&token) == std::mem::discriminant(target)
            {
                return Ok(token);
            }
            self.skip(&token);
        }
    }

    fn next(&mut self) -> Result<Token, ScanError> {
        let token = self.tokens.next()?;
        tracing::trace!(token = %token, "scanned");
        Ok(token)
    }

    fn skip(&mut self, token: &Token) {
        self.diagnostics
            .warn(format!("skipping token type {}", token));
    }
}
