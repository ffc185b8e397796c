//! YAML text to value tree.
//!
//! This module wires the `yaml-rust2` scanner to the tree builder, so callers
//! holding a document in memory get a tree in one call.
//!
//! # Example
//!
//! ```
//! use yamlpick::diagnostics::Diagnostics;
//! use yamlpick::document::parser::parse_str;
//!
//! let mut diagnostics = Diagnostics::new();
//! let tree = parse_str("name: Alice\nage: 30", &mut diagnostics).unwrap();
//! assert!(tree.unwrap().as_dict().is_some());
//! ```

use super::builder::parse;
use super::node::Value;
use super::scanner::YamlScanner;
use crate::diagnostics::Diagnostics;
use crate::error::FatalError;

/// Parses a YAML string into a value tree.
///
/// # Returns
///
/// - `Ok(Some(tree))` on success
/// - `Ok(None)` for an empty document or one whose structure could not be
///   built (the reason is in `diagnostics`)
/// - `Err(FatalError)` if the scanner rejected the text
///
/// Only the first document of a multi-document stream is built.
pub fn parse_str(yaml_str: &str, diagnostics: &mut Diagnostics) -> Result<Option<Value>, FatalError> {
    parse(YamlScanner::new(yaml_str), diagnostics)
}
