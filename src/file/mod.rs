//! File I/O for YAML documents.
//!
//! This module loads YAML documents from disk or stdin, optionally
//! gzip-compressed, and turns them into value trees.

pub mod loader;
