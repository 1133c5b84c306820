// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory full-text search over tabular rows.
//!
//! Rows are indexed by the words of their searchable cells. Queries are
//! spell-checked against the indexed vocabulary, expanded into word tuples,
//! and ranked so that rows containing more of the query, and containing it in
//! order, come first.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  table.rs   │────▶│   build/     │────▶│     index/       │
//! │ (Table,     │     │ (clean text, │     │ (id/word/q-gram  │
//! │  RowTable)  │     │  parallel)   │     │  counters)       │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!                                                   │
//!        ┌──────────────────────────────────────────┤
//!        ▼                                          ▼
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   fuzzy/     │────▶│   search/    │────▶│    engine.rs     │
//! │ (OSA, spell  │     │ (query plan, │     │ (public API,     │
//! │  check)      │     │  ranking)    │     │  mutations)      │
//! └──────────────┘     └──────────────┘     └──────────────────┘
//! ```
//!
//! | Module      | Role                                              |
//! |-------------|---------------------------------------------------|
//! | `table`     | Input tables and the insertion-ordered row store  |
//! | `index`     | Four-way counter index, q-gram candidate finder   |
//! | `build`     | Cleaning and applying batches of rows             |
//! | `fuzzy`     | OSA distance and spelling alternatives            |
//! | `search`    | Literal search, query expansion, scoring, ranking |
//! | `engine`    | `SearchEngine`, the public entry point            |
//! | `contracts` | Row/index consistency checks                      |
//!
//! # Usage
//!
//! ```
//! use rowsearch::{SearchEngine, Table};
//!
//! let table = Table::from_rows(
//!     ["id", "name", "location"],
//!     [
//!         ["a", "apple pie", "north"],
//!         ["b", "apple tart", "north"],
//!         ["c", "banana pie", "south"],
//!     ],
//! )
//! .unwrap();
//! let mut engine = SearchEngine::new(&table, "id", &[]).unwrap();
//!
//! assert_eq!(engine.search("apple pie")[0], "a");
//! engine.remove_identifier("a").unwrap();
//! assert_eq!(engine.search("appel"), ["b"]);
//! ```

pub mod build;
pub mod config;
pub mod contracts;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod search;
pub mod table;
pub mod util;

pub use config::{SearchConfig, QGRAM_SIZE, QUERY_COLUMN};
pub use engine::{IndexStats, SearchEngine};
pub use error::{InvariantError, Result, SearchError};
pub use fuzzy::spellcheck::SpellCheck;
pub use fuzzy::{osa, osa_distance};
pub use index::SearchIndex;
pub use table::{RowTable, StoredRow, Table};
pub use util::counter::Counter;
pub use util::normalize::clean_text;
