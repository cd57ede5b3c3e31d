//! The file-like input boundary.
//!
//! Whatever mechanism captures the file — drag-and-drop, a file picker, a
//! plain path — reduces to an [`UploadFile`]: a name, a declared size, a
//! declared MIME type and the raw bytes. The parser validates against the
//! declared metadata, so a host can hand over browser-style file handles
//! without touching the filesystem.

use crate::data::ParseResult;
use std::path::Path;

/// A file handed over for parsing.
#[derive(Clone, Debug)]
pub struct UploadFile {
    /// File name as reported by the capture mechanism.
    pub name: String,
    /// Declared MIME type (may be empty when the source does not know).
    pub mime_type: String,
    /// Declared size in bytes. Checked against the configured limit before
    /// any content is inspected.
    pub size: u64,
    /// Raw file content.
    pub contents: Vec<u8>,
}

impl UploadFile {
    /// Build an in-memory upload; the declared size is the content length.
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        contents: impl Into<Vec<u8>>,
    ) -> Self {
        let contents = contents.into();
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size: contents.len() as u64,
            contents,
        }
    }

    /// Read an upload from disk, guessing the MIME type from the extension.
    pub fn from_path(path: &Path) -> ParseResult<Self> {
        let metadata = std::fs::metadata(path)?;
        let contents = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = mime_for_name(&name);

        Ok(Self {
            mime_type: mime_type.to_string(),
            size: metadata.len(),
            name,
            contents,
        })
    }
}

fn mime_for_name(name: &str) -> &'static str {
    if name.to_lowercase().ends_with(".csv") {
        "text/csv"
    } else {
        "application/octet-stream"
    }
}
