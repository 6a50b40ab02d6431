//! Line-oriented grid scripts
//!
//! Each non-empty line is one request; `#` starts a comment. Cell references
//! use `A1` notation where the row number is the one-based position in the
//! *current* view, so they follow filters and sorting the way a user sees
//! them.
//!
//! ```text
//! set A1 Name
//! set B1 42
//! select A2
//! move next
//! filter A app
//! sort B
//! insert-row
//! print
//! ```

use anyhow::{anyhow, bail, Context, Result};

use crate::commands::Cmd;
use crate::grid::{parse_cell_reference, parse_column_label, GridController, Intent, RowId};
use crate::messages::GridMsg;
use crate::update::update;

/// A parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Blank line or comment
    Skip,
    /// Emit the current view
    Print,
    Apply(GridMsg),
}

/// Split off the first whitespace-delimited word
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}

fn parse_intent(word: &str) -> Result<Intent> {
    Ok(match word.to_ascii_lowercase().as_str() {
        "up" => Intent::Up,
        "down" => Intent::Down,
        "left" => Intent::Left,
        "right" => Intent::Right,
        "next" | "tab" => Intent::Next,
        "prev" | "shift-tab" => Intent::Prev,
        other => bail!("unknown direction '{}'", other),
    })
}

fn parse_column(word: &str) -> Result<usize> {
    parse_column_label(word).ok_or_else(|| anyhow!("invalid column '{}'", word))
}

/// Resolve an `A1` reference against the current view
fn resolve_cell(grid: &GridController, reference: &str) -> Result<(RowId, usize)> {
    let (row, col) =
        parse_cell_reference(reference).ok_or_else(|| anyhow!("invalid cell '{}'", reference))?;
    let view = grid.view();
    let target = view
        .get(row)
        .ok_or_else(|| anyhow!("row {} is not visible ({} rows shown)", row + 1, view.len()))?;
    Ok((target.id(), col))
}

/// Parse one script line into a step
pub fn parse_line(grid: &GridController, line: &str) -> Result<Step> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Step::Skip);
    }

    let (command, rest) = split_word(line);
    let msg = match command {
        "print" => return Ok(Step::Print),
        "set" => {
            let (reference, value) = split_word(rest);
            let (row_id, column) = resolve_cell(grid, reference)?;
            GridMsg::EditCell {
                row_id,
                column,
                value: value.to_string(),
            }
        }
        "edit" => GridMsg::EditSelected(rest.to_string()),
        "select" => {
            let (row_id, column) = resolve_cell(grid, rest)?;
            GridMsg::SelectCell { row_id, column }
        }
        "move" => GridMsg::Navigate(parse_intent(rest)?),
        "filter" => {
            let (column, pattern) = split_word(rest);
            GridMsg::SetFilter {
                column: parse_column(column)?,
                pattern: pattern.to_string(),
            }
        }
        "clear-filters" => GridMsg::ClearFilters,
        "sort" => GridMsg::ToggleSort(parse_column(rest)?),
        "unsort" => GridMsg::ClearSort,
        "insert-row" if rest.is_empty() => GridMsg::InsertRowAtSelection,
        "insert-row" => GridMsg::InsertRowBefore(resolve_cell(grid, rest)?.0),
        "insert-column" if rest.is_empty() => GridMsg::InsertColumnAtSelection,
        "insert-column" => GridMsg::InsertColumnBefore(parse_column(rest)?),
        other => bail!("unknown command '{}'", other),
    };
    Ok(Step::Apply(msg))
}

/// Run a whole script, calling `on_print` for every `print` line
///
/// Stops at the first failing line. Returns the number of applied requests.
pub fn run_script(
    grid: &mut GridController,
    source: &str,
    mut on_print: impl FnMut(&GridController) -> Result<()>,
) -> Result<usize> {
    let mut applied = 0;

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        let step = parse_line(grid, line).with_context(|| format!("line {}: {}", line_no, line))?;

        match step {
            Step::Skip => {}
            Step::Print => on_print(grid)?,
            Step::Apply(msg) => {
                let cmd = update(grid, msg)
                    .with_context(|| format!("line {}: {}", line_no, line))?;
                if let Some(sel) = cmd.as_ref().and_then(Cmd::focus_target) {
                    tracing::debug!(line = line_no, row = %sel.row_id, column = sel.column, "focus");
                }
                applied += 1;
            }
        }
    }

    Ok(applied)
}
