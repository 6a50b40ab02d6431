//! Command-line argument parsing for the grid driver
//!
//! Supports:
//! - Replaying a script from a file or stdin
//! - Overriding the configured grid size
//! - Table or JSON output

use clap::Parser;
use std::path::PathBuf;

use cellgrid::config::{GridConfig, OutputFormat};

/// Replay grid requests against an in-memory grid and print the view
#[derive(Parser, Debug)]
#[command(name = "cellgrid", version, about = "Headless driver for the cellgrid engine")]
pub struct CliArgs {
    /// Script to replay (reads stdin when omitted or "-")
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Rows in the starting grid
    #[arg(short = 'r', long, value_name = "N")]
    pub rows: Option<usize>,

    /// Columns in the starting grid
    #[arg(short = 'c', long, value_name = "N")]
    pub columns: Option<usize>,

    /// Print views as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Don't write the rolling log file
    #[arg(long)]
    pub no_log_file: bool,
}

/// Where the script comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    Stdin,
    File(PathBuf),
}

/// Settings for one run, after merging CLI flags over the config file
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: ScriptSource,
    pub rows: usize,
    pub columns: usize,
    pub output: OutputFormat,
}

impl CliArgs {
    /// Merge parsed CLI args over a loaded config
    pub fn into_run_config(self, config: GridConfig) -> Result<RunConfig, String> {
        let source = match self.script {
            Some(path) if path.as_os_str() != "-" => ScriptSource::File(path),
            _ => ScriptSource::Stdin,
        };

        let rows = self.rows.unwrap_or(config.rows);
        let columns = self.columns.unwrap_or(config.columns);
        if rows == 0 || columns == 0 {
            return Err("Grid needs at least one row and one column".to_string());
        }

        let output = if self.json {
            OutputFormat::Json
        } else {
            config.output
        };

        Ok(RunConfig {
            source,
            rows,
            columns,
            output,
        })
    }
}
