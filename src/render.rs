//! Plain-text and JSON rendering of the current view
//!
//! Renders the grid with:
//! - Row numbers column (positions in the view, one-based)
//! - Column headers (A, B, C, ...)
//! - Selected cell wrapped in brackets

use serde::Serialize;

use crate::grid::{column_label, GridController, RowId, RowSnapshot, Selection};

const MIN_WIDTH: usize = 3;
const MAX_WIDTH: usize = 40;

/// Truncate text with ellipsis if too long
pub fn truncate_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        s.chars().take(max_chars).collect()
    } else {
        let mut result: String = s.chars().take(max_chars - 1).collect();
        result.push('…');
        result
    }
}

/// Serializable payload describing what a UI would show
#[derive(Debug, Serialize)]
pub struct ViewOutput {
    pub columns: Vec<String>,
    pub selection: Option<Selection>,
    pub rows: Vec<RowSnapshot>,
}

impl ViewOutput {
    pub fn capture(grid: &GridController) -> Self {
        Self {
            columns: grid.column_labels(),
            selection: grid.resolved_selection(),
            rows: grid.view().snapshot(),
        }
    }
}

pub fn render_json(grid: &GridController) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ViewOutput::capture(grid))
}

/// Render the view as an aligned text table
pub fn render_table(grid: &GridController) -> String {
    let view = grid.view();
    let selection = grid.resolved_selection();
    let column_count = grid.model().column_count();

    let display = |row_id: RowId, col: usize, value: &str| -> String {
        let value = truncate_text(value, MAX_WIDTH);
        match selection {
            Some(sel) if sel.row_id == row_id && sel.column == col => format!("[{}]", value),
            _ => value,
        }
    };

    let mut widths: Vec<usize> = (0..column_count)
        .map(|col| column_label(col).len().max(MIN_WIDTH))
        .collect();
    for row in view.iter() {
        for (col, value) in row.cells().iter().enumerate() {
            let width = display(row.id(), col, value).chars().count();
            widths[col] = widths[col].max(width);
        }
    }

    let gutter = view.len().max(1).to_string().len().max(2);
    let mut out = String::new();

    out.push_str(&" ".repeat(gutter));
    for (col, width) in widths.iter().enumerate() {
        out.push_str(&format!(" | {:<width$}", column_label(col), width = *width));
    }
    out.push('\n');

    for (position, row) in view.iter().enumerate() {
        out.push_str(&format!("{:>gutter$}", position + 1, gutter = gutter));
        for (col, value) in row.cells().iter().enumerate() {
            let cell = display(row.id(), col, value);
            out.push_str(&format!(" | {:<width$}", cell, width = widths[col]));
        }
        out.push('\n');
    }

    if view.is_empty() {
        out.push_str("(no rows match the current filters)\n");
    }
    out
}
