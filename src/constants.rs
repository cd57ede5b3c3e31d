//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Upload Limits
// ============================================================================

/// Maximum accepted upload size in bytes (5 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// File extension accepted for uploads
pub const ACCEPTED_EXTENSION: &str = ".csv";

/// MIME type accepted for uploads
pub const ACCEPTED_MIME_TYPE: &str = "text/csv";

// ============================================================================
// Table Layout
// ============================================================================

/// Fixed display width for every column in pixels
pub const COLUMN_WIDTH_PX: f32 = 200.0;

/// Row height in pixels for virtual scrolling calculations
pub const ROW_HEIGHT: f32 = 28.0;

/// Header height in pixels
pub const HEADER_HEIGHT: f32 = 28.0;

/// Number of rows to render beyond the visible area as buffer
pub const OVERSCAN_ROWS: usize = 10;
