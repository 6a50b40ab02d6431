//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use cellgrid::grid::{GridController, GridModel, RowId, Selection};

/// Build a controller from literal rows
pub fn test_grid(rows: &[&[&str]]) -> GridController {
    let raw = rows
        .iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect();
    GridController::new(GridModel::from_rows(raw).expect("test grid must not be empty"))
}

/// Build a rows x cols controller where every cell reads `r{row}c{col}`
pub fn labelled_grid(rows: usize, cols: usize) -> GridController {
    let raw = (0..rows)
        .map(|r| (0..cols).map(|c| format!("r{}c{}", r, c)).collect())
        .collect();
    GridController::new(GridModel::from_rows(raw).unwrap())
}

/// Values of one column in visible order
pub fn visible_column(grid: &GridController, col: usize) -> Vec<String> {
    grid.view()
        .iter()
        .map(|r| r.cell(col).unwrap_or_default().to_string())
        .collect()
}

/// Id of the row at a visible position
pub fn visible_id(grid: &GridController, position: usize) -> RowId {
    grid.view()
        .get(position)
        .map(|r| r.id())
        .expect("position must be visible")
}

/// Select the cell at (visible position, column)
pub fn select_visible(grid: &mut GridController, position: usize, col: usize) {
    let id = visible_id(grid, position);
    grid.select(id, col).unwrap();
}

/// Selection as (visible position, column)
pub fn visible_selection(grid: &GridController) -> (usize, usize) {
    let Selection { row_id, column } = grid.selection();
    let position = grid
        .view()
        .position(row_id)
        .expect("selection must be visible");
    (position, column)
}
