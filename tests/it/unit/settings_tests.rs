//! Unit tests for the settings module.

use dropgrid::constants::{
    ACCEPTED_EXTENSION, ACCEPTED_MIME_TYPE, COLUMN_WIDTH_PX, MAX_UPLOAD_BYTES,
};
use dropgrid::settings::Settings;
use std::io::Write;

#[test]
fn test_defaults_match_constants() {
    let settings = Settings::default();
    assert_eq!(settings.max_file_size_bytes, MAX_UPLOAD_BYTES);
    assert_eq!(settings.max_file_size_bytes, 5 * 1024 * 1024);
    assert_eq!(settings.column_width_px, COLUMN_WIDTH_PX);
    assert_eq!(settings.accepted_extension, ACCEPTED_EXTENSION);
    assert_eq!(settings.accepted_mime_type, ACCEPTED_MIME_TYPE);
}

#[test]
fn test_load_full_settings_file() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    write!(
        tmp,
        r#"{{
            "max_file_size_bytes": 1024,
            "column_width_px": 120.0,
            "accepted_extension": ".tsv",
            "accepted_mime_type": "text/tab-separated-values"
        }}"#
    )
    .unwrap();

    let settings = Settings::load(tmp.path()).unwrap();
    assert_eq!(settings.max_file_size_bytes, 1024);
    assert_eq!(settings.column_width_px, 120.0);
    assert_eq!(settings.accepted_extension, ".tsv");
    assert_eq!(settings.accepted_mime_type, "text/tab-separated-values");
}

#[test]
fn test_partial_settings_fill_with_defaults() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    write!(tmp, r#"{{ "max_file_size_bytes": 42 }}"#).unwrap();

    let settings = Settings::load(tmp.path()).unwrap();
    assert_eq!(settings.max_file_size_bytes, 42);
    assert_eq!(settings.column_width_px, COLUMN_WIDTH_PX);
    assert_eq!(settings.accepted_extension, ACCEPTED_EXTENSION);
}

#[test]
fn test_malformed_settings_propagate_as_error() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    write!(tmp, "not json at all").unwrap();

    let err = Settings::load(tmp.path()).unwrap_err();
    assert!(err.to_string().contains("failed to parse settings file"));
}

#[test]
fn test_missing_settings_file_propagates_as_error() {
    let err = Settings::load(std::path::Path::new("/nonexistent/settings.json")).unwrap_err();
    assert!(err.to_string().contains("failed to read settings file"));
}

#[test]
fn test_settings_roundtrip() {
    let settings = Settings::default();
    let json = serde_json::to_string(&settings).unwrap();
    let back: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(settings, back);
}
