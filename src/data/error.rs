//! Error types for upload parsing.
//!
//! Every variant is a user-input error: recoverable, surfaced as a
//! dismissable toast, never fatal to the process.

use thiserror::Error;

/// Errors that can occur while validating and parsing an upload
#[derive(Error, Debug)]
pub enum ParseError {
    /// IO error from std::io (disk-backed uploads only)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Declared size exceeds the configured limit
    #[error("File too large: {size} bytes (max {max} bytes)")]
    TooLarge { size: u64, max: u64 },

    /// Neither the MIME type nor the file name matches the accepted CSV type
    #[error("Invalid file type: {name} ({mime_type})")]
    InvalidType { name: String, mime_type: String },

    /// Zero records, or a header record with zero fields
    #[error("Empty or invalid CSV file")]
    EmptyOrInvalid,

    /// Tokenization failed (malformed quoting, encoding error)
    #[error("Malformed CSV content: {0}")]
    MalformedContent(String),
}

/// Result type alias for upload parsing
pub type ParseResult<T> = Result<T, ParseError>;

impl ParseError {
    /// Message shown in the error toast.
    pub fn user_message(&self) -> String {
        match self {
            ParseError::Io(e) => format!("Error reading file: {}", e),
            ParseError::TooLarge { max, .. } => format!(
                "File size exceeds {}MB. Please upload a smaller file.",
                max / (1024 * 1024)
            ),
            ParseError::InvalidType { .. } => {
                "Invalid file type. Please upload a CSV file.".to_string()
            }
            ParseError::EmptyOrInvalid => {
                "Invalid CSV file. Please upload a file with valid data.".to_string()
            }
            ParseError::MalformedContent(msg) => format!("Error parsing file: {}", msg),
        }
    }
}
