//! yamlpick - build a value tree from YAML tokens and pick values out of it.
//!
//! The tree builder consumes a stream of scanner tokens and produces a
//! [`Value`] tree of strings, arrays, and dicts. A compact path query such as
//! `.servers[0].host` then extracts a node without manual traversal.
//!
//! # Example
//!
//! ```
//! use yamlpick::{getstr, parse_str, Diagnostics, DuplicateKeyPolicy};
//!
//! let mut diagnostics = Diagnostics::new();
//! let tree = parse_str("servers:\n  - host: alpha\n  - host: beta\n", &mut diagnostics).unwrap();
//!
//! let host = getstr(tree.as_ref(), ".servers[1].host", DuplicateKeyPolicy::First, &mut diagnostics);
//! assert_eq!(host, Some("beta"));
//! ```

pub mod config;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod file;
pub mod query;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use document::builder::{parse, TreeBuilder};
pub use document::node::{dispose, dump_tree, Entry, Value};
pub use document::parser::parse_str;
pub use document::scanner::YamlScanner;
pub use document::token::{ScanError, Token, TokenSource, TokenStream};
pub use error::FatalError;
pub use query::{get, getstr, validate, DuplicateKeyPolicy, Found, QueryError};
