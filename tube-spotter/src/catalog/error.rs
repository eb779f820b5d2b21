//! Catalog validation errors.

use std::fmt;

/// Which input list a malformed record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Station,
    Association,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Station => f.write_str("station"),
            RecordKind::Association => f.write_str("association"),
        }
    }
}

/// Errors raised while building a catalog from raw records.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// A record could not be turned into a valid domain value
    #[error("malformed {kind} record #{index} ({name:?}): {reason}")]
    MalformedRecord {
        kind: RecordKind,
        index: usize,
        name: String,
        reason: String,
    },

    /// Two stations share a name
    #[error("duplicate station name: {name:?}")]
    DuplicateStation { name: String },
}
