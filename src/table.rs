// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Row storage.
//!
//! `Table` is what callers hand in: ordered column names and string cells.
//! `RowTable` is what the engine keeps: one `StoredRow` per identifier, in
//! insertion order, each carrying its cleaned `query_col`.
//!
//! # Invariants
//!
//! - Identifiers are non-empty and unique.
//! - The identifier column is in the schema but never in `searchable`.
//! - `query_col` is reserved: no input table may carry it.
//! - `positions[id]` is the index of `id` in `rows`.

use std::collections::{HashMap, HashSet};
use std::io::Read;

use serde_json::Value;

use crate::config::QUERY_COLUMN;
use crate::error::{Result, SearchError};

// =============================================================================
// INPUT TABLE
// =============================================================================

/// Tabular input: ordered columns, every row the same width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table. Column names must be distinct.
    pub fn new<C, S>(columns: C) -> Result<Self>
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(SearchError::schema(format!("duplicate column '{}'", column)));
            }
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Build a table from columns and rows in one go.
    pub fn from_rows<C, S, R, I, V>(columns: C, rows: R) -> Result<Self>
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let mut table = Self::new(columns)?;
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a row. It must have exactly one cell per column.
    pub fn push_row<I, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let row: Vec<String> = values.into_iter().map(Into::into).collect();
        if row.len() != self.columns.len() {
            return Err(SearchError::schema(format!(
                "row has {} cells but table has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Build a table from JSON objects.
    ///
    /// Columns are the union of all object keys. Objects are scanned in order
    /// and each one's unseen keys are appended in sorted key order, since
    /// `serde_json` maps do not keep insertion order. Strings
    /// are taken as-is, numbers and booleans are formatted, `null` and missing
    /// keys become empty strings, and nested values are kept as JSON text.
    pub fn from_json_records(records: &[Value]) -> Result<Self> {
        let mut columns: Vec<String> = Vec::new();
        let mut known: HashSet<String> = HashSet::new();
        for record in records {
            let object = record.as_object().ok_or_else(|| {
                SearchError::schema(format!("expected a JSON object per row, got {}", record))
            })?;
            for key in object.keys() {
                if known.insert(key.clone()) {
                    columns.push(key.clone());
                }
            }
        }

        let mut table = Self::new(columns)?;
        for record in records {
            // Checked above.
            let Some(object) = record.as_object() else {
                continue;
            };
            let row: Vec<String> = table
                .columns
                .iter()
                .map(|column| object.get(column).map(json_cell).unwrap_or_default())
                .collect();
            table.rows.push(row);
        }
        Ok(table)
    }

    /// Parse a JSON array of row objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Read a JSON array of row objects.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_json_value(value)
    }

    fn from_json_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(records) => Self::from_json_records(&records),
            other => Err(SearchError::schema(format!(
                "expected a JSON array of rows, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }
}

fn json_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// ROW STORE
// =============================================================================

/// One stored row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRow {
    pub id: String,
    /// Every schema column except `query_col`, identifier included.
    pub cells: HashMap<String, String>,
    /// Cleaned, space-joined searchable cells.
    pub query_col: String,
}

impl StoredRow {
    /// Cell value; columns the row predates read as empty.
    pub fn cell(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }
}

/// A validated batch, not yet applied.
#[derive(Debug)]
pub(crate) struct PendingBatch {
    /// Columns the batch adds to the schema, in table order.
    pub new_columns: Vec<String>,
    /// `(id, cells, raw searchable text)` per row, in table order.
    pub rows: Vec<(String, HashMap<String, String>, String)>,
}

/// Insertion-ordered row store keyed by identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTable {
    identifier_column: String,
    columns: Vec<String>,
    searchable: Vec<String>,
    rows: Vec<StoredRow>,
    positions: HashMap<String, usize>,
}

impl RowTable {
    /// Empty store over the schema of `table`.
    ///
    /// An empty `searchable` means every column except the identifier.
    pub(crate) fn for_table(
        table: &Table,
        identifier_column: &str,
        searchable: &[&str],
    ) -> Result<Self> {
        check_columns(table, identifier_column)?;

        let searchable: Vec<String> = if searchable.is_empty() {
            table
                .columns()
                .iter()
                .filter(|c| c.as_str() != identifier_column)
                .cloned()
                .collect()
        } else {
            let mut resolved: Vec<String> = Vec::new();
            for &column in searchable {
                if column == QUERY_COLUMN {
                    return Err(SearchError::schema(format!(
                        "'{}' is reserved and cannot be searchable",
                        QUERY_COLUMN
                    )));
                }
                if !table.has_column(column) {
                    return Err(SearchError::schema(format!(
                        "searchable column '{}' not in table",
                        column
                    )));
                }
                if column != identifier_column && !resolved.iter().any(|c| c == column) {
                    resolved.push(column.to_string());
                }
            }
            resolved
        };

        Ok(Self {
            identifier_column: identifier_column.to_string(),
            columns: table.columns().to_vec(),
            searchable,
            rows: Vec::new(),
            positions: HashMap::new(),
        })
    }

    /// Validate `table` as a batch of new rows without touching the store.
    pub(crate) fn prepare(&self, table: &Table) -> Result<PendingBatch> {
        self.prepare_with(table, None)
    }

    /// Like `prepare`, but `replacing` may be reused since it is about to be
    /// removed.
    pub(crate) fn prepare_replacement(&self, table: &Table, replacing: &str) -> Result<PendingBatch> {
        self.prepare_with(table, Some(replacing))
    }

    fn prepare_with(&self, table: &Table, replacing: Option<&str>) -> Result<PendingBatch> {
        check_columns(table, &self.identifier_column)?;
        let id_index = table
            .column_index(&self.identifier_column)
            .ok_or_else(|| missing_identifier(&self.identifier_column))?;

        let mut batch_ids: HashSet<&str> = HashSet::with_capacity(table.len());
        for row in table.rows() {
            let id = row[id_index].as_str();
            if id.is_empty() {
                return Err(SearchError::schema("identifier must not be empty"));
            }
            let taken = self.positions.contains_key(id) && replacing != Some(id);
            if taken || !batch_ids.insert(id) {
                return Err(SearchError::DuplicateIdentifier { id: id.to_string() });
            }
        }

        let new_columns: Vec<String> = table
            .columns()
            .iter()
            .filter(|c| !self.columns.contains(c))
            .cloned()
            .collect();

        let searchable: Vec<&str> = self
            .searchable
            .iter()
            .chain(new_columns.iter().filter(|c| **c != self.identifier_column))
            .map(String::as_str)
            .collect();

        let rows = table
            .rows()
            .iter()
            .map(|row| {
                let cells: HashMap<String, String> = table
                    .columns()
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect();
                let raw = searchable
                    .iter()
                    .map(|c| cells.get(*c).map(String::as_str).unwrap_or(""))
                    .collect::<Vec<_>>()
                    .join(" ");
                (row[id_index].clone(), cells, raw)
            })
            .collect();

        Ok(PendingBatch { new_columns, rows })
    }

    /// Apply a prepared batch. `cleaned[i]` is the cleaned text of `batch.rows[i]`.
    pub(crate) fn commit(&mut self, batch: PendingBatch, cleaned: Vec<String>) {
        debug_assert_eq!(batch.rows.len(), cleaned.len());
        for column in batch.new_columns {
            if column != self.identifier_column {
                self.searchable.push(column.clone());
            }
            self.columns.push(column);
        }
        for ((id, cells, _), query_col) in batch.rows.into_iter().zip(cleaned) {
            self.positions.insert(id.clone(), self.rows.len());
            self.rows.push(StoredRow {
                id,
                cells,
                query_col,
            });
        }
    }

    /// Drop a row, keeping the order of the rest.
    pub(crate) fn remove(&mut self, id: &str) -> Option<StoredRow> {
        let position = self.positions.remove(id)?;
        let row = self.rows.remove(position);
        for (offset, later) in self.rows[position..].iter().enumerate() {
            self.positions.insert(later.id.clone(), position + offset);
        }
        Some(row)
    }

    pub fn get(&self, id: &str) -> Option<&StoredRow> {
        self.positions.get(id).map(|&p| &self.rows[p])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Insertion position of `id`, used to break score ties.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StoredRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn identifier_column(&self) -> &str {
        &self.identifier_column
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn searchable_columns(&self) -> &[String] {
        &self.searchable
    }

    /// Case-insensitive substring test over the original searchable cells.
    /// `needle` must already be lowercase.
    pub fn any_searchable_contains(&self, row: &StoredRow, needle: &str) -> bool {
        self.searchable
            .iter()
            .any(|column| row.cell(column).to_lowercase().contains(needle))
    }

    /// Rough heap footprint of the stored rows.
    pub(crate) fn estimated_bytes(&self) -> usize {
        let per_row: usize = self
            .rows
            .iter()
            .map(|row| {
                row.id.len()
                    + row.query_col.len()
                    + row
                        .cells
                        .iter()
                        .map(|(k, v)| k.len() + v.len() + 2 * std::mem::size_of::<String>())
                        .sum::<usize>()
                    + std::mem::size_of::<StoredRow>()
            })
            .sum();
        per_row + self.positions.len() * (std::mem::size_of::<String>() + 8)
    }
}

fn missing_identifier(column: &str) -> SearchError {
    SearchError::schema(format!("identifier column '{}' missing", column))
}

fn check_columns(table: &Table, identifier_column: &str) -> Result<()> {
    if table.has_column(QUERY_COLUMN) {
        return Err(SearchError::schema(format!(
            "column '{}' is reserved",
            QUERY_COLUMN
        )));
    }
    if !table.has_column(identifier_column) {
        return Err(missing_identifier(identifier_column));
    }
    Ok(())
}
