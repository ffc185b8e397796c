//! How a key that appears more than once in a dict is resolved.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Duplicate-key resolution policy for dict lookups.
///
/// Dicts keep every entry in document order, duplicates included; the
/// policy only matters when a query names a repeated key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateKeyPolicy {
    /// The first matching entry wins; later ones are never looked at.
    #[default]
    First,
    /// The last matching entry wins.
    Last,
    /// More than one matching entry fails the lookup.
    Error,
}

impl std::fmt::Display for DuplicateKeyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DuplicateKeyPolicy::First => "first",
            DuplicateKeyPolicy::Last => "last",
            DuplicateKeyPolicy::Error => "error",
        };
        f.write_str(name)
    }
}
