//! The token boundary between a YAML scanner and the tree builder.
//!
//! The builder never looks at raw text. It pulls typed tokens from a
//! [`TokenSource`], one at a time, and only cares about the handful of kinds
//! that carry structure. Everything else arrives as [`Token::Other`] and is
//! skipped with a diagnostic.
//!
//! "Block" tokens come from indentation-based YAML, "flow" tokens from the
//! JSON-like bracket syntax. Mappings share a single block end token with
//! sequences, which is why there are three end kinds for four start kinds.

use std::collections::VecDeque;
use std::fmt;

use thiserror::Error;

/// A typed lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    StreamStart,
    /// End of input. Also stands in for "no token".
    StreamEnd,
    Scalar(String),
    BlockSequenceStart,
    BlockMappingStart,
    /// Closes either a block sequence or a block mapping.
    BlockEnd,
    FlowSequenceStart,
    FlowSequenceEnd,
    FlowMappingStart,
    FlowMappingEnd,
    /// The `-` in front of a block sequence item.
    BlockEntry,
    /// The `,` between flow collection items.
    FlowEntry,
    Key,
    Value,
    /// Any kind the builder has no use for, carried by name.
    Other(&'static str),
}

impl Token {
    /// Diagnostic name of this token's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::StreamStart => "YAML_STREAM_START_TOKEN",
            Token::StreamEnd => "YAML_STREAM_END_TOKEN",
            Token::Scalar(_) => "YAML_SCALAR_TOKEN",
            Token::BlockSequenceStart => "YAML_BLOCK_SEQUENCE_START_TOKEN",
            Token::BlockMappingStart => "YAML_BLOCK_MAPPING_START_TOKEN",
            Token::BlockEnd => "YAML_BLOCK_END_TOKEN",
            Token::FlowSequenceStart => "YAML_FLOW_SEQUENCE_START_TOKEN",
            Token::FlowSequenceEnd => "YAML_FLOW_SEQUENCE_END_TOKEN",
            Token::FlowMappingStart => "YAML_FLOW_MAPPING_START_TOKEN",
            Token::FlowMappingEnd => "YAML_FLOW_MAPPING_END_TOKEN",
            Token::BlockEntry => "YAML_BLOCK_ENTRY_TOKEN",
            Token::FlowEntry => "YAML_FLOW_ENTRY_TOKEN",
            Token::Key => "YAML_KEY_TOKEN",
            Token::Value => "YAML_VALUE_TOKEN",
            Token::Other(name) => name,
        }
    }

    /// True for any token that closes a collection, or for end of input.
    pub fn is_end(&self) -> bool {
        matches!(
            self,
            Token::StreamEnd | Token::BlockEnd | Token::FlowSequenceEnd | Token::FlowMappingEnd
        )
    }

    /// True for the tokens that close a mapping of either flavor.
    pub fn is_mapping_end(&self) -> bool {
        matches!(self, Token::BlockEnd | Token::FlowMappingEnd)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind_name())
    }
}

/// The token source could not make sense of its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ScanError {
    message: String,
}

impl ScanError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Pull interface over a stream of tokens.
///
/// Once exhausted, a source keeps returning [`Token::StreamEnd`].
pub trait TokenSource {
    fn next_token(&mut self) -> Result<Token, ScanError>;
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn next_token(&mut self) -> Result<Token, ScanError> {
        (**self).next_token()
    }
}

/// A token source over an already materialized list of tokens.
///
/// # Example
///
/// ```
/// use yamlpick::document::token::{Token, TokenSource, TokenStream};
///
/// let mut stream = TokenStream::new(vec![Token::StreamStart, Token::Scalar("x".into())]);
/// assert_eq!(stream.next_token().unwrap(), Token::StreamStart);
/// assert_eq!(stream.next_token().unwrap(), Token::Scalar("x".into()));
/// assert_eq!(stream.next_token().unwrap(), Token::StreamEnd);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
    error: Option<ScanError>,
}

impl TokenStream {
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
            error: None,
        }
    }

    /// Makes the stream fail with `error` once its tokens run out.
    pub fn failing_with(mut self, error: ScanError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Result<Token, ScanError> {
        match self.tokens.pop_front() {
            Some(token) => Ok(token),
            None => match &self.error {
                Some(error) => Err(error.clone()),
                None => Ok(Token::StreamEnd),
            },
        }
    }
}

/// One-token lookahead over any source.
pub(crate) struct Lookahead<S> {
    source: S,
    peeked: Option<Token>,
}

impl<S: TokenSource> Lookahead<S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            peeked: None,
        }
    }

    pub(crate) fn next(&mut self) -> Result<Token, ScanError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.source.next_token(),
        }
    }

    pub(crate) fn peek(&mut self) -> Result<&Token, ScanError> {
        if self.peeked.is_none() {
            self.peeked = Some(self.source.next_token()?);
        }
        Ok(self.peeked.get_or_insert(Token::StreamEnd))
    }
}
