//! Unrecoverable errors.
//!
//! Structural problems in a document and bad queries are reported through
//! [`Diagnostics`](crate::diagnostics::Diagnostics) and surface as `None`.
//! A scan-level failure is a different severity: the token stream itself is
//! corrupt, so the builder stops and hands this error back instead.

use thiserror::Error;

use crate::document::token::ScanError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FatalError {
    /// The token source could not produce another token.
    #[error("broken document: {0}")]
    Scan(#[from] ScanError),
}
