//! [`TokenSource`] backed by the `yaml-rust2` scanner.

use std::str::Chars;

use yaml_rust2::scanner::{Scanner, TokenType};

use super::token::{ScanError, Token, TokenSource};

/// Tokenizes an in-memory YAML document.
///
/// # Example
///
/// ```
/// use yamlpick::document::scanner::YamlScanner;
/// use yamlpick::document::token::{Token, TokenSource};
///
/// let mut scanner = YamlScanner::new("hello");
/// assert_eq!(scanner.next_token().unwrap(), Token::StreamStart);
/// assert_eq!(scanner.next_token().unwrap(), Token::Scalar("hello".into()));
/// ```
pub struct YamlScanner<'a> {
    scanner: Scanner<Chars<'a>>,
    finished: bool,
}

impl<'a> YamlScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            scanner: Scanner::new(source.chars()),
            finished: false,
        }
    }
}

impl TokenSource for YamlScanner<'_> {
    fn next_token(&mut self) -> Result<Token, ScanError> {
        if self.finished {
            return Ok(Token::StreamEnd);
        }
        match self.scanner.next_token() {
            Ok(Some(token)) => {
                let token = convert(token.1);
                if token == Token::StreamEnd {
                    self.finished = true;
                }
                Ok(token)
            }
            Ok(None) => {
                self.finished = true;
                Ok(Token::StreamEnd)
            }
            Err(err) => Err(ScanError::new(err.to_string())),
        }
    }
}

fn convert(kind: TokenType) -> Token {
    match kind {
        TokenType::StreamEnd => Token::StreamEnd,
        TokenType::StreamStart(..) => Token::StreamStart,
        TokenType::Scalar(_, text) => Token::Scalar(text),
        TokenType::BlockSequenceStart => Token::BlockSequenceStart,
        TokenType::BlockMappingStart => Token::BlockMappingStart,
        TokenType::BlockEnd => Token::BlockEnd,
        TokenType::FlowSequenceStart => Token::FlowSequenceStart,
        TokenType::FlowSequenceEnd => Token::FlowSequenceEnd,
        TokenType::FlowMappingStart => Token::FlowMappingStart,
        TokenType::FlowMappingEnd => Token::FlowMappingEnd,
        TokenType::BlockEntry => Token::BlockEntry,
        TokenType::FlowEntry => Token::FlowEntry,
        TokenType::Key => Token::Key,
        TokenType::Value => Token::Value,
        TokenType::VersionDirective(..) => Token::Other("YAML_VERSION_DIRECTIVE_TOKEN"),
        TokenType::TagDirective(..) => Token::Other("YAML_TAG_DIRECTIVE_TOKEN"),
        TokenType::DocumentStart => Token::Other("YAML_DOCUMENT_START_TOKEN"),
        TokenType::DocumentEnd => Token::Other("YAML_DOCUMENT_END_TOKEN"),
        TokenType::Alias(..) => Token::Other("YAML_ALIAS_TOKEN"),
        TokenType::Anchor(..) => Token::Other("YAML_ANCHOR_TOKEN"),
        TokenType::Tag(..) => Token::Other("YAML_TAG_TOKEN"),
        #[allow(unreachable_patterns)]
        _ => Token::Other("YAML_UNRECOGNIZED_TOKEN"),
    }
}
