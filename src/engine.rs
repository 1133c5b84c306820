// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: a row store plus its index, kept in lockstep.
//!
//! Every mutation validates first and applies second, so a call that returns
//! an error has changed nothing. In debug builds the row/index contracts are
//! re-checked after each mutation.
//!
//! # Example
//!
//! ```
//! use rowsearch::{SearchEngine, Table};
//!
//! let table = Table::from_rows(
//!     ["id", "name", "location"],
//!     [["a", "apple pie", "north"], ["b", "banana pie", "south"]],
//! )
//! .unwrap();
//! let engine = SearchEngine::new(&table, "id", &[]).unwrap();
//! assert_eq!(engine.search("appel pie"), ["a", "b"]);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::build::apply_batch;
use crate::config::{SearchConfig, QUERY_COLUMN};
use crate::contracts::{check_engine_consistent, verify_rows};
use crate::error::{InvariantError, Result, SearchError};
use crate::fuzzy::spellcheck::{spell_check, SpellCheck};
use crate::index::SearchIndex;
use crate::search::fuzzy::{fuzzy_scores, rank};
use crate::search::literal::literal_search;
use crate::search::query::query_words;
use crate::table::{RowTable, Table};
use crate::util::counter::Counter;

const MIB: f64 = 1024.0 * 1024.0;
const GIB: f64 = 1024.0 * MIB;

/// Size summary of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub rows: usize,
    pub words: usize,
    pub qgrams: usize,
    pub estimated_bytes: usize,
}

/// Full-text search over the rows of a table.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    rows: RowTable,
    index: SearchIndex,
    config: SearchConfig,
}

impl SearchEngine {
    /// Build an engine over `table` with the default configuration.
    ///
    /// An empty `searchable_columns` means every column except the identifier.
    pub fn new(table: &Table, identifier_column: &str, searchable_columns: &[&str]) -> Result<Self> {
        Self::with_config(table, identifier_column, searchable_columns, SearchConfig::default())
    }

    /// Build an engine with an explicit configuration.
    pub fn with_config(
        table: &Table,
        identifier_column: &str,
        searchable_columns: &[&str],
        config: SearchConfig,
    ) -> Result<Self> {
        let mut rows = RowTable::for_table(table, identifier_column, searchable_columns)?;
        let batch = rows.prepare(table)?;
        let mut index = SearchIndex::new();
        apply_batch(&mut rows, &mut index, batch, &config);

        info!(
            rows = rows.len(),
            words = index.word_count(),
            qgrams = index.qgram_count(),
            searchable = ?rows.searchable_columns(),
            "built search engine"
        );
        let engine = Self {
            rows,
            index,
            config,
        };
        engine.check_contracts();
        Ok(engine)
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Append new rows.
    ///
    /// Every identifier must be new, both to the engine and within `table`.
    /// Columns not yet in the schema are added and become searchable; existing
    /// rows read them as empty.
    pub fn add_identifier(&mut self, table: &Table) -> Result<()> {
        let batch = self.rows.prepare(table)?;
        debug!(rows = batch.rows.len(), "adding rows");
        apply_batch(&mut self.rows, &mut self.index, batch, &self.config);
        self.check_contracts();
        Ok(())
    }

    /// Drop a row and every index entry only it contributed.
    pub fn remove_identifier(&mut self, id: &str) -> Result<()> {
        if !self.rows.contains(id) {
            return Err(SearchError::UnknownIdentifier { id: id.to_string() });
        }
        self.remove_unchecked(id);
        debug!(id, "removed row");
        self.check_contracts();
        Ok(())
    }

    /// Overwrite some cells of a row.
    ///
    /// `patch` must hold exactly one row. Its identifier cell, if present,
    /// must equal `id`. A `query_col` column is ignored with a warning. The
    /// row is re-indexed and moves to the end of the row order.
    pub fn change_identifier(&mut self, id: &str, patch: &Table) -> Result<()> {
        let current = self
            .rows
            .get(id)
            .ok_or_else(|| SearchError::UnknownIdentifier { id: id.to_string() })?;
        if patch.len() != 1 {
            return Err(SearchError::invalid_patch(format!(
                "expected exactly one row, got {}",
                patch.len()
            )));
        }

        let mut cells = current.cells.clone();
        let mut columns: Vec<String> = self.rows.columns().to_vec();
        for (column, value) in patch.columns().iter().zip(&patch.rows()[0]) {
            if column == QUERY_COLUMN {
                warn!(id, "ignoring attempt to set {}", QUERY_COLUMN);
                continue;
            }
            if column == self.rows.identifier_column() && value != id {
                return Err(SearchError::invalid_patch(format!(
                    "cannot change identifier '{}' to '{}'",
                    id, value
                )));
            }
            if !columns.contains(column) {
                columns.push(column.clone());
            }
            cells.insert(column.clone(), value.clone());
        }

        let values: Vec<String> = columns
            .iter()
            .map(|column| cells.get(column).cloned().unwrap_or_default())
            .collect();
        let replacement = Table::from_rows(columns, [values])?;
        let batch = self.rows.prepare_replacement(&replacement, id)?;

        self.remove_unchecked(id);
        apply_batch(&mut self.rows, &mut self.index, batch, &self.config);
        debug!(id, "changed row");
        self.check_contracts();
        Ok(())
    }

    fn remove_unchecked(&mut self, id: &str) {
        self.rows.remove(id);
        self.index.remove_identifier(id);
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    /// Ranked identifiers for `text`.
    ///
    /// Blank text returns every identifier in row order. Otherwise the fuzzy
    /// ranking decides membership; among those, rows that literally contain
    /// `text` come first.
    pub fn search(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return self.identifiers();
        }
        let fuzzy = self.fuzzy_search(text);
        if fuzzy.is_empty() {
            return fuzzy;
        }

        let literal = literal_search(&self.rows, text, Some(fuzzy.as_slice()));
        let literal_set: HashSet<&str> = literal.iter().map(String::as_str).collect();
        let rest: Vec<String> = fuzzy
            .iter()
            .filter(|id| !literal_set.contains(id.as_str()))
            .cloned()
            .collect();
        literal.into_iter().chain(rest).collect()
    }

    /// Identifiers whose searchable cells contain `text`, ignoring case, in
    /// row order.
    pub fn literal_search(&self, text: &str) -> Vec<String> {
        literal_search(&self.rows, text, None)
    }

    /// Identifiers ranked by fuzzy score, best first.
    pub fn fuzzy_search(&self, text: &str) -> Vec<String> {
        rank(&self.fuzzy_search_scores(text), &self.rows)
    }

    /// Raw fuzzy score per identifier.
    pub fn fuzzy_search_scores(&self, text: &str) -> Counter<String> {
        fuzzy_scores(&self.index, &self.rows, text, &self.config)
    }

    /// Order a score bag from [`fuzzy_search_scores`](Self::fuzzy_search_scores)
    /// the way [`fuzzy_search`](Self::fuzzy_search) does. Identifiers no longer
    /// in the engine sort last.
    pub fn rank_scores(&self, scores: &Counter<String>) -> Vec<String> {
        rank(scores, &self.rows)
    }

    /// Spelling alternatives for each cleaned word of `text`.
    pub fn spell_check(&self, text: &str) -> SpellCheck {
        let words = query_words(text, &self.config);
        spell_check(&self.index, &words, &self.config)
    }

    /// Whether `word` is in the vocabulary exactly.
    pub fn word_in_index(&self, word: &str) -> Result<bool> {
        if word.chars().any(char::is_whitespace) {
            return Err(SearchError::schema(format!(
                "'{}' is not a single word",
                word
            )));
        }
        Ok(self.index.contains_word(word))
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Identifiers in row order.
    pub fn identifiers(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.id.clone()).collect()
    }

    /// Column values of a row, `query_col` included.
    pub fn row(&self, id: &str) -> Option<HashMap<String, String>> {
        self.rows.get(id).map(|row| {
            let mut values: HashMap<String, String> = self
                .rows
                .columns()
                .iter()
                .map(|column| (column.clone(), row.cell(column).to_string()))
                .collect();
            values.insert(QUERY_COLUMN.to_string(), row.query_col.clone());
            values
        })
    }

    pub fn columns(&self) -> &[String] {
        self.rows.columns()
    }

    pub fn searchable_columns(&self) -> &[String] {
        self.rows.searchable_columns()
    }

    pub fn identifier_column(&self) -> &str {
        self.rows.identifier_column()
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            rows: self.rows.len(),
            words: self.index.word_count(),
            qgrams: self.index.qgram_count(),
            estimated_bytes: self.index.estimated_bytes() + self.rows.estimated_bytes(),
        }
    }

    /// Estimated in-memory footprint, e.g. `"0.02 MB"`.
    pub fn size_of_index(&self) -> String {
        format_size(self.stats().estimated_bytes)
    }

    /// Check the index and its agreement with the rows.
    pub fn verify(&self) -> std::result::Result<(), InvariantError> {
        self.index.verify()?;
        verify_rows(&self.rows, &self.index)
    }

    #[inline]
    fn check_contracts(&self) {
        check_engine_consistent(&self.rows, &self.index);
    }
}

fn format_size(bytes: usize) -> String {
    let bytes = bytes as f64;
    if bytes < GIB {
        format!("{:.2} MB", bytes / MIB)
    } else {
        format!("{:.2} GB", bytes / GIB)
    }
}
