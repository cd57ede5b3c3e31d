//! End-to-end upload workflows: file in, table out.

use crate::helpers::{TestCsvBuilder, csv_upload};
use dropgrid::app::{AppState, AppView};
use dropgrid::constants::ROW_HEIGHT;
use dropgrid::notifications::ToastVariant;
use dropgrid::settings::Settings;
use dropgrid::table::TableView;
use dropgrid::upload::UploadFile;
use std::sync::Arc;

fn state() -> AppState {
    AppState::new(Settings::default())
}

#[test]
fn test_upload_to_viewing() {
    let mut app = state();
    assert_eq!(app.view(), AppView::Upload);
    assert!(app.dataset().is_none());

    let file = TestCsvBuilder::new()
        .with_headers(&["name", "age"])
        .with_row(&["Alice", "30"])
        .with_row(&["Bob", "25"])
        .build();
    app.upload(&file);

    assert_eq!(app.view(), AppView::Viewing);
    assert!(app.toasts.is_empty());

    let dataset = app.dataset().expect("dataset after successful upload");
    assert_eq!(dataset.column_count(), 2);
    assert_eq!(dataset.row_count(), 2);
    assert_eq!(dataset.rows[0].value("name"), "Alice");
}

#[test]
fn test_dataset_feeds_the_renderer() {
    let mut app = state();
    let file = TestCsvBuilder::new()
        .with_headers(&["label", "value"])
        .with_n_rows(500)
        .build();
    app.upload(&file);

    let dataset = Arc::clone(app.dataset().unwrap());
    let mut view = TableView::new(dataset, 10.0 * ROW_HEIGHT);

    let rendered = view.rows_to_render();
    assert!(rendered.len() < 500);
    assert_eq!(rendered[0].index, 0);

    view.on_scroll(100.0 * ROW_HEIGHT);
    assert_eq!(view.rows_to_render()[0].index, 100);
}

#[test]
fn test_oversized_upload_is_rejected_with_toast() {
    let mut app = state();

    // Declared size is what gets checked; content is never inspected.
    let mut file = csv_upload("big.csv", "a,b\n1,2\n");
    file.size = 6 * 1024 * 1024;
    app.upload(&file);

    assert_eq!(app.view(), AppView::Upload);
    assert!(app.dataset().is_none());

    assert_eq!(app.toasts.count(), 1);
    let toast = &app.toasts.toasts()[0];
    assert_eq!(toast.variant, ToastVariant::Error);
    assert_eq!(
        toast.message,
        "File size exceeds 5MB. Please upload a smaller file."
    );
}

#[test]
fn test_wrong_type_is_rejected_with_toast() {
    let mut app = state();
    let file = UploadFile::new("report.pdf", "application/pdf", "a,b\n1,2\n");
    app.upload(&file);

    assert_eq!(app.view(), AppView::Upload);
    assert_eq!(app.toasts.count(), 1);
    assert_eq!(
        app.toasts.toasts()[0].message,
        "Invalid file type. Please upload a CSV file."
    );
}

#[test]
fn test_mime_type_alone_is_enough() {
    let mut app = state();

    // No .csv extension, but the capture mechanism declared text/csv.
    let file = TestCsvBuilder::new()
        .with_name("export")
        .with_mime_type("text/csv")
        .with_headers(&["a"])
        .with_row(&["1"])
        .build();
    app.upload(&file);

    assert_eq!(app.view(), AppView::Viewing);
    assert!(app.toasts.is_empty());
}

#[test]
fn test_empty_upload_is_rejected_with_toast() {
    let mut app = state();
    app.upload(&csv_upload("empty.csv", ""));

    assert_eq!(app.view(), AppView::Upload);
    assert_eq!(app.toasts.count(), 1);
    assert_eq!(
        app.toasts.toasts()[0].message,
        "Invalid CSV file. Please upload a file with valid data."
    );
}

#[test]
fn test_failed_upload_allows_immediate_retry() {
    let mut app = state();

    app.upload(&csv_upload("empty.csv", ""));
    assert_eq!(app.view(), AppView::Upload);

    app.upload(&csv_upload("good.csv", "a,b\n1,2\n"));
    assert_eq!(app.view(), AppView::Viewing);
    assert_eq!(app.dataset().unwrap().row_count(), 1);
}

#[test]
fn test_new_upload_fully_replaces_dataset() {
    let mut app = state();

    app.upload(&csv_upload("first.csv", "a,b\n1,2\n3,4\n"));
    assert_eq!(app.dataset().unwrap().row_count(), 2);

    app.upload(&csv_upload("second.csv", "x\nonly\n"));
    let dataset = app.dataset().unwrap();
    assert_eq!(dataset.column_count(), 1);
    assert_eq!(dataset.row_count(), 1);
    assert_eq!(dataset.rows[0].value("x"), "only");
}

#[test]
fn test_reset_returns_to_upload_view() {
    let mut app = state();
    app.upload(&csv_upload("data.csv", "a,b\n1,2\n"));
    assert_eq!(app.view(), AppView::Viewing);

    app.reset();
    assert_eq!(app.view(), AppView::Upload);
    assert!(app.dataset().is_none());
}

#[test]
fn test_header_only_upload_is_a_valid_empty_dataset() {
    let mut app = state();
    app.upload(&csv_upload("headers.csv", "a,b,c\n"));

    // Distinct from "no dataset loaded": the table view exists, with an
    // empty body under a rendered header.
    assert_eq!(app.view(), AppView::Viewing);
    let dataset = Arc::clone(app.dataset().unwrap());
    let view = TableView::new(dataset, 10.0 * ROW_HEIGHT);
    assert_eq!(view.columns().len(), 3);
    assert!(view.rows_to_render().is_empty());
}
