//! Structural edit tests - row/column insertion, id stability, rectangularity

mod common;

use std::collections::HashSet;

use cellgrid::grid::{GridError, GridModel, Intent};
use common::{labelled_grid, select_visible, test_grid, visible_column, visible_id};

fn assert_rectangular(model: &GridModel) {
    let width = model.column_count();
    for row in model.rows() {
        assert_eq!(row.cells().len(), width, "row {} is ragged", row.id());
    }
}

fn assert_unique_ids(model: &GridModel) {
    let ids: HashSet<_> = model.rows().iter().map(|r| r.id()).collect();
    assert_eq!(ids.len(), model.row_count());
}

// ========================================================================
// Row insertion
// ========================================================================

#[test]
fn test_insert_row_above_selection() {
    let mut grid = test_grid(&[&["a"], &["b"], &["c"]]);
    select_visible(&mut grid, 1, 0);

    let new_id = grid.insert_row_at_selection().unwrap();

    assert_eq!(visible_column(&grid, 0), vec!["a", "", "b", "c"]);
    assert_eq!(grid.model().position(new_id), Some(1));
    // Selection still points at "b"
    assert_eq!(grid.model().cell(grid.selection().row_id, 0), Some("b"));
}

#[test]
fn test_inserted_rows_get_fresh_ids() {
    let mut grid = labelled_grid(3, 2);
    let first = grid.model().first_row_id();

    for _ in 0..10 {
        grid.insert_row_before(first).unwrap();
        assert_unique_ids(grid.model());
        assert_rectangular(grid.model());
    }
    assert_eq!(grid.model().row_count(), 13);
}

#[test]
fn test_insert_row_keeps_existing_ids() {
    let mut grid = labelled_grid(3, 1);
    let before: Vec<_> = grid.model().rows().iter().map(|r| r.id()).collect();

    grid.insert_row_before(before[2]).unwrap();

    let after: Vec<_> = grid.model().rows().iter().map(|r| r.id()).collect();
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], before[1]);
    assert_eq!(after[3], before[2]);
}

#[test]
fn test_insert_row_before_unknown_id_fails() {
    let mut grid = labelled_grid(2, 2);
    let mut other = labelled_grid(5, 1);
    let foreign = other.insert_row_before(other.model().first_row_id()).unwrap();

    let err = grid.insert_row_before(foreign).unwrap_err();
    assert_eq!(err, GridError::NotFound(foreign));
    assert_eq!(grid.model().row_count(), 2);
}

#[test]
fn test_inserted_row_under_sort_lands_by_value() {
    let mut grid = test_grid(&[&["b"], &["c"]]);
    grid.toggle_sort(0);
    let c = visible_id(&grid, 1);

    grid.insert_row_before(c).unwrap();

    // Empty values sort first, regardless of storage position
    assert_eq!(visible_column(&grid, 0), vec!["", "b", "c"]);
}

// ========================================================================
// Column insertion
// ========================================================================

#[test]
fn test_insert_column_shifts_cells_right() {
    let mut grid = test_grid(&[&["a", "b"], &["c", "d"]]);

    grid.insert_column_before(1).unwrap();

    assert_rectangular(grid.model());
    assert_eq!(grid.model().column_count(), 3);
    assert_eq!(visible_column(&grid, 0), vec!["a", "c"]);
    assert_eq!(visible_column(&grid, 1), vec!["", ""]);
    assert_eq!(visible_column(&grid, 2), vec!["b", "d"]);
}

#[test]
fn test_insert_column_at_end_appends() {
    let mut grid = test_grid(&[&["a", "b"]]);

    grid.insert_column_before(2).unwrap();

    assert_eq!(grid.column_labels(), vec!["A", "B", "C"]);
    assert_eq!(visible_column(&grid, 2), vec![""]);
}

#[test]
fn test_insert_column_past_end_fails_untouched() {
    let mut grid = test_grid(&[&["a", "b"], &["c", "d"]]);

    let err = grid.insert_column_before(3).unwrap_err();

    assert_eq!(err, GridError::OutOfRange { column: 3, limit: 2 });
    assert_eq!(grid.model().column_count(), 2);
    assert_rectangular(grid.model());
}

#[test]
fn test_insert_column_at_selection_focuses_new_column() {
    let mut grid = test_grid(&[&["a", "b", "c"]]);
    select_visible(&mut grid, 0, 1);

    grid.insert_column_at_selection().unwrap();

    let selection = grid.selection();
    assert_eq!(selection.column, 1);
    assert_eq!(grid.model().cell(selection.row_id, 1), Some(""));
    assert_eq!(grid.model().cell(selection.row_id, 2), Some("b"));
}

#[test]
fn test_navigation_reaches_new_column() {
    let mut grid = labelled_grid(1, 2);
    select_visible(&mut grid, 0, 1);
    grid.insert_column_before(2).unwrap();

    grid.navigate(Intent::Right);
    assert_eq!(grid.selection().column, 2);
}

// ========================================================================
// Mixed edit sequences
// ========================================================================

#[test]
fn test_interleaved_edits_stay_rectangular() {
    let mut grid = labelled_grid(2, 2);

    for step in 0..12 {
        if step % 3 == 0 {
            let col = step % (grid.model().column_count() + 1);
            grid.insert_column_before(col).unwrap();
        } else {
            let id = grid.model().rows()[step % grid.model().row_count()].id();
            grid.insert_row_before(id).unwrap();
        }
        let id = grid.model().first_row_id();
        grid.set_cell(id, 0, format!("step {}", step)).unwrap();

        assert_rectangular(grid.model());
        assert_unique_ids(grid.model());
    }
    assert_eq!(grid.model().column_count(), 6);
    assert_eq!(grid.model().row_count(), 10);
}
