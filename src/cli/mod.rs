// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the rowsearch command-line interface.
//!
//! Every invocation loads a JSON array of row objects, builds an engine over
//! it, and runs one subcommand. Nothing is persisted between runs.

pub mod display;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use rowsearch::{SearchConfig, SearchEngine, Table};

#[derive(Parser)]
#[command(
    name = "rowsearch",
    about = "Spell-correcting full-text search over JSON rows",
    version
)]
pub struct Cli {
    /// JSON file holding an array of row objects
    #[arg(short, long, global = true, default_value = "rows.json")]
    pub input: PathBuf,

    /// Identifier column
    #[arg(long, global = true, default_value = "id")]
    pub id: String,

    /// Searchable columns, comma separated (default: all but the identifier)
    #[arg(long, global = true, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// JSON file overriding ranking and spell-check settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More logging (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ranked search: literal matches first, then fuzzy matches
    Search {
        query: String,

        /// Maximum number of identifiers to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Case-insensitive substring search over the original cells
    Literal { query: String },

    /// Fuzzy ranking only
    Fuzzy {
        query: String,

        /// Print `id<TAB>score` instead of identifiers
        #[arg(long)]
        scores: bool,
    },

    /// Show spelling alternatives for each query word
    Spell { query: String },

    /// Print index statistics
    Stats,
}

/// Load rows from a JSON file.
pub fn load_table(path: &Path) -> Result<Table> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Table::from_json_reader(BufReader::new(file))
        .with_context(|| format!("reading rows from {}", path.display()))
}

/// Load a config file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    let Some(path) = path else {
        return Ok(SearchConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    SearchConfig::from_json(&json).with_context(|| format!("parsing config {}", path.display()))
}

/// Build the engine the subcommands run against.
pub fn open_engine(cli: &Cli) -> Result<SearchEngine> {
    let table = load_table(&cli.input)?;
    let config = load_config(cli.config.as_deref())?;
    let columns: Vec<&str> = cli.columns.iter().map(String::as_str).collect();
    SearchEngine::with_config(&table, &cli.id, &columns, config)
        .with_context(|| format!("indexing {}", cli.input.display()))
}
