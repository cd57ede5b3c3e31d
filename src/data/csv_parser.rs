//! CSV upload parsing
//!
//! Validates an upload against the configured size and type constraints,
//! tokenizes it with RFC 4180 semantics (quoted fields, doubled quotes,
//! embedded commas and newlines), derives column definitions from the first
//! record and maps every subsequent record into a keyed [`Row`].
//!
//! The delimiter is fixed to a comma; there is no delimiter detection.

use crate::data::error::{ParseError, ParseResult};
use crate::settings::Settings;
use crate::types::{Column, Dataset, Row};
use crate::upload::UploadFile;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::Cursor;

/// Parse an upload into a Dataset.
///
/// Preconditions are checked in order, first violation wins:
/// 1. declared size over the limit -> [`ParseError::TooLarge`]
/// 2. MIME type and file name both unaccepted -> [`ParseError::InvalidType`]
/// 3. tokenization failure -> [`ParseError::MalformedContent`]
/// 4. zero records, or an empty header record -> [`ParseError::EmptyOrInvalid`]
///
/// A file of exactly the size limit passes. Blank lines are skipped entirely
/// and never counted as records.
pub fn parse_upload(file: &UploadFile, settings: &Settings) -> ParseResult<Dataset> {
    if file.size > settings.max_file_size_bytes {
        return Err(ParseError::TooLarge {
            size: file.size,
            max: settings.max_file_size_bytes,
        });
    }

    if !is_accepted_type(file, settings) {
        return Err(ParseError::InvalidType {
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
        });
    }

    let content = std::str::from_utf8(&file.contents)
        .map_err(|e| ParseError::MalformedContent(format!("invalid UTF-8: {}", e)))?;

    let records = tokenize(content)?;

    let Some((header, data)) = records.split_first() else {
        return Err(ParseError::EmptyOrInvalid);
    };
    if header.is_empty() {
        return Err(ParseError::EmptyOrInvalid);
    }

    let columns = derive_columns(header, settings.column_width_px);
    let rows: Vec<Row> = data.iter().map(|record| zip_row(&columns, record)).collect();

    tracing::debug!(
        "Parsed upload {} into {} rows x {} cols",
        file.name,
        rows.len(),
        columns.len()
    );

    Ok(Dataset { columns, rows })
}

/// A file is accepted if either its declared MIME type or its name matches.
fn is_accepted_type(file: &UploadFile, settings: &Settings) -> bool {
    file.mime_type == settings.accepted_mime_type
        || file.name.ends_with(&settings.accepted_extension)
}

/// Tokenize CSV content into records.
///
/// Uses the csv crate for RFC 4180 compliant parsing. Blank lines produce
/// no record.
fn tokenize(content: &str) -> ParseResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(content.as_bytes()));

    let mut records: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| ParseError::MalformedContent(e.to_string()))?;
        records.push(record.iter().map(str::to_string).collect());
    }

    Ok(records)
}

/// Derive one Column per header cell, order preserved.
///
/// The key defaults to the raw label. A duplicated label gets its occurrence
/// index appended (`label_2`, `label_3`, ...), bumped further if that key is
/// itself taken by a literal header cell.
fn derive_columns(header: &[String], width: f32) -> Vec<Column> {
    let mut used: HashSet<String> = HashSet::new();
    let mut occurrences: HashMap<&str, usize> = HashMap::new();

    header
        .iter()
        .map(|label| {
            let occurrence = occurrences.entry(label.as_str()).or_insert(0);
            *occurrence += 1;

            let mut n = *occurrence;
            let mut key = if n == 1 {
                label.clone()
            } else {
                format!("{}_{}", label, n)
            };
            while !used.insert(key.clone()) {
                n += 1;
                key = format!("{}_{}", label, n);
            }

            Column::new(key, label.clone(), width)
        })
        .collect()
}

/// Zip a record positionally against the columns.
///
/// Missing trailing cells become empty strings; cells beyond the column
/// count are dropped.
fn zip_row(columns: &[Column], record: &[String]) -> Row {
    let values: BTreeMap<String, String> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| (col.key.clone(), record.get(i).cloned().unwrap_or_default()))
        .collect();
    Row::from_values(values)
}
