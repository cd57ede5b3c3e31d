//! Upload and display settings.
//!
//! Every option has a default from [`crate::constants`]; a settings file only
//! needs to name the options it overrides. Malformed settings are a
//! programming-level error and propagate as `anyhow::Error` rather than being
//! surfaced to the user.

use crate::constants::{ACCEPTED_EXTENSION, ACCEPTED_MIME_TYPE, COLUMN_WIDTH_PX, MAX_UPLOAD_BYTES};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Recognized configuration options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Uploads larger than this are rejected before any content inspection.
    pub max_file_size_bytes: u64,
    /// Fixed display width applied to every derived column.
    pub column_width_px: f32,
    /// File extension accepted when the MIME type does not match.
    pub accepted_extension: String,
    /// MIME type accepted regardless of file name.
    pub accepted_mime_type: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_file_size_bytes: MAX_UPLOAD_BYTES,
            column_width_px: COLUMN_WIDTH_PX,
            accepted_extension: ACCEPTED_EXTENSION.to_string(),
            accepted_mime_type: ACCEPTED_MIME_TYPE.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, filling unnamed options with defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse settings file {}", path.display()))
    }
}
