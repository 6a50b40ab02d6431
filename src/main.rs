//! cellgrid - headless grid driver
//!
//! Builds a grid, replays a script of grid requests against it and prints
//! the resulting view.

mod cli;

use std::io::Read;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use cellgrid::config::{GridConfig, OutputFormat};
use cellgrid::grid::GridController;
use cellgrid::render::{render_json, render_table};
use cellgrid::script::run_script;

use cli::{CliArgs, ScriptSource};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    cellgrid::tracing::init(!args.no_log_file);

    let config = match &args.config {
        Some(path) => GridConfig::load_from(path).map_err(|e| anyhow!(e))?,
        None => GridConfig::load(),
    };
    let run = args.into_run_config(config).map_err(|e| anyhow!(e))?;

    let source = match &run.source {
        ScriptSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read script from stdin")?;
            buf
        }
        ScriptSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?,
    };

    let mut grid = GridController::with_size(run.rows, run.columns)?;
    tracing::info!(rows = run.rows, columns = run.columns, "grid created");

    let print = |grid: &GridController| -> Result<()> {
        match run.output {
            OutputFormat::Table => print!("{}", render_table(grid)),
            OutputFormat::Json => println!("{}", render_json(grid)?),
        }
        Ok(())
    };

    let mut printed = false;
    let applied = run_script(&mut grid, &source, |g| {
        printed = true;
        print(g)
    })?;
    tracing::info!(applied, "script finished");

    // Scripts without an explicit `print` still show the final state
    if !printed {
        print(&grid)?;
    }
    Ok(())
}
