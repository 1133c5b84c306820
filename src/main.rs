// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! rowsearch - search a JSON table from the command line.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
use cli::display::{format_ids, format_scores, format_spell_check, format_stats};
use cli::{open_engine, Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let engine = open_engine(cli)?;

    let output = match &cli.command {
        Commands::Search { query, limit } => {
            let mut ids = engine.search(query);
            if let Some(limit) = limit {
                ids.truncate(*limit);
            }
            format_ids(&ids)
        }
        Commands::Literal { query } => format_ids(&engine.literal_search(query)),
        Commands::Fuzzy { query, scores } => {
            let bag = engine.fuzzy_search_scores(query);
            let ranked = engine.rank_scores(&bag);
            if *scores {
                format_scores(&ranked, &bag)
            } else {
                format_ids(&ranked)
            }
        }
        Commands::Spell { query } => format_spell_check(&engine.spell_check(query)),
        Commands::Stats => format_stats(&engine, &engine.stats()),
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "warn,rowsearch=debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
