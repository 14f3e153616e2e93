//! JSON encoding of the dataset document.

use crate::tracker::domain::Dataset;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

const INDENT: &[u8] = b"    ";

/// Encodes `dataset` as pretty-printed JSON with four-space indentation and
/// a trailing newline.
pub(super) fn encode(dataset: &Dataset) -> Result<Vec<u8>, serde_json::Error> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    dataset.serialize(&mut serializer)?;
    buffer.push(b'\n');
    Ok(buffer)
}

/// Reasons a stored document cannot be turned into a dataset.
#[derive(Debug, thiserror::Error)]
pub(super) enum DecodeError {
    #[error("malformed dataset document: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error(transparent)]
    Integrity(#[from] crate::tracker::domain::DomainError),
}

/// Parses and validates a stored dataset document.
pub(super) fn decode(contents: &str) -> Result<Dataset, DecodeError> {
    let dataset: Dataset = serde_json::from_str(contents)?;
    dataset.validate()?;
    Ok(dataset)
}
