//! Value tree model and the machinery that builds it.
//!
//! - [`token`] - the token boundary a scanner feeds
//! - [`scanner`] - a token source backed by `yaml-rust2`
//! - [`builder`] - recursive-descent construction of the tree
//! - [`node`] - the tree itself
//! - [`parser`] - text in, tree out

pub mod builder;
pub mod node;
pub mod parser;
pub mod scanner;
pub mod token;
