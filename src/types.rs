//! Core data model produced by the CSV parser.
//!
//! A successful parse yields a [`Dataset`]: an ordered list of [`Column`]
//! definitions derived from the header record, and an ordered list of
//! [`Row`] values keyed by column key. The dataset is immutable once
//! produced; a new upload fully replaces it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column metadata derived from one header cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Unique lookup key. Defaults to the raw header label; duplicated
    /// labels get an occurrence suffix (`label_2`, `label_3`, ...).
    pub key: String,
    /// Display text, exactly as it appeared in the file.
    pub label: String,
    /// Fixed display width in pixels (from settings, not content).
    pub width: f32,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>, width: f32) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            width,
        }
    }
}

/// One data record, keyed by [`Column::key`].
///
/// Invariant: holds an entry for every column key of the owning dataset.
/// Records shorter than the header are padded with empty strings; cells
/// beyond the header count are dropped at parse time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    values: BTreeMap<String, String>,
}

impl Row {
    pub fn from_values(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    /// Cell value for a column key, empty string if absent.
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Number of cells held by this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A validated `(columns, rows)` pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Column definitions, file order preserved.
    pub columns: Vec<Column>,
    /// Data rows, file order preserved.
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// A dataset with zero rows is valid: the table renders header-only.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate column keys in display order.
    pub fn column_keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.key.as_str())
    }
}
