use std::{io, path::PathBuf};
use thiserror::Error;

/// Reasons a single course block cannot be turned into a record
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("missing anchor {anchor:?} for field `{field}`")]
    MissingAnchor {
        field: &'static str,
        anchor: &'static str,
    },

    #[error("missing line {line} (`{field}`)")]
    MissingLine { field: &'static str, line: usize },

    #[error("invalid hour count {value:?} for field `{field}`")]
    InvalidHours { field: &'static str, value: String },

    #[error("no availability marker for minor {minor:?}")]
    MalformedAvailability { minor: String },

    #[error("availability lists minors {found:?}, expected {expected:?}")]
    AvailabilityMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
}

/// Failures while building a catalog from a syllabus export
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read syllabus at {path}: {source}")]
    SourceUnavailable { path: PathBuf, source: io::Error },

    #[error("malformed course block #{index} ({heading}): {source}")]
    MalformedBlock {
        index: usize,
        /// First non-empty line of the block, to locate it in the document
        heading: String,
        source: ExtractError,
    },
}

/// A query referenced a minor absent from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown minor {minor:?}")]
pub struct UnknownMinorError {
    pub minor: String,
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("cannot read roster at {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid roster at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
