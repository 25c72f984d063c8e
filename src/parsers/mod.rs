//! SPDX JSON document parsing.
//!
//! The conversion consumes SPDX 2.2/2.3 JSON documents. Malformed JSON is
//! fatal for that file; the parser never recovers partial documents or
//! fabricates a manifest for unparseable input.

use crate::error::{ParseErrorKind, Result, SnapshotError};
use crate::model::SpdxDocument;
use std::path::Path;

/// Maximum SPDX file size (512 MB). A guard against accidentally feeding a
/// container image or similar blob into the converter.
const MAX_SPDX_FILE_SIZE: u64 = 512 * 1024 * 1024;

/// Parse an SPDX document from string content.
pub fn parse_spdx_str(content: &str) -> Result<SpdxDocument> {
    let trimmed = content.trim_start();
    if !trimmed.starts_with('{') {
        return Err(SnapshotError::parse(
            "detecting document format",
            ParseErrorKind::NotSpdx("expected a JSON object".to_string()),
        ));
    }

    let document: SpdxDocument = serde_json::from_str(content).map_err(|e| {
        SnapshotError::parse(
            "deserializing SPDX JSON",
            ParseErrorKind::InvalidJson(e.to_string()),
        )
    })?;

    Ok(document)
}

/// Parse an SPDX document from a file path.
pub fn parse_spdx(path: &Path) -> Result<SpdxDocument> {
    let metadata = std::fs::metadata(path).map_err(|e| SnapshotError::io(path, e))?;
    if metadata.len() > MAX_SPDX_FILE_SIZE {
        return Err(SnapshotError::parse(
            format!("at {}", path.display()),
            ParseErrorKind::TooLarge {
                size: metadata.len(),
                limit: MAX_SPDX_FILE_SIZE,
            },
        ));
    }

    let content = std::fs::read_to_string(path).map_err(|e| SnapshotError::io(path, e))?;
    parse_spdx_str(&content)
}
