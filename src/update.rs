//! Update functions for the Elm-style architecture
//!
//! All grid state transformations flow through [`update`].

use crate::commands::Cmd;
use crate::grid::{GridController, GridResult, Selection};
use crate::messages::GridMsg;

/// Main update function - applies a message to the controller
///
/// Failed requests leave the grid untouched and return the error; the
/// returned command tells the UI what to refresh on success.
pub fn update(grid: &mut GridController, msg: GridMsg) -> GridResult<Option<Cmd>> {
    let span = tracing::debug_span!("grid_update", msg = ?msg);
    let _guard = span.enter();

    let result = update_inner(grid, msg);
    if let Err(e) = &result {
        tracing::warn!("grid request rejected: {}", e);
    }
    result
}

fn update_inner(grid: &mut GridController, msg: GridMsg) -> GridResult<Option<Cmd>> {
    let before = grid.selection();

    match msg {
        GridMsg::Navigate(intent) => {
            grid.navigate(intent);
            return Ok(focus_if_changed(before, grid.selection()));
        }
        GridMsg::SelectCell { row_id, column } => {
            grid.select(row_id, column)?;
            return Ok(focus_if_changed(before, grid.selection()));
        }

        GridMsg::EditCell {
            row_id,
            column,
            value,
        } => grid.set_cell(row_id, column, value)?,
        GridMsg::EditSelected(value) => grid.edit_selected(value)?,

        GridMsg::SetFilter { column, pattern } => grid.set_filter(column, pattern),
        GridMsg::ClearFilters => grid.clear_filters(),
        GridMsg::ToggleSort(column) => {
            grid.toggle_sort(column);
        }
        GridMsg::ClearSort => grid.clear_sort(),

        GridMsg::InsertRowBefore(row_id) => {
            grid.insert_row_before(row_id)?;
        }
        GridMsg::InsertColumnBefore(column) => grid.insert_column_before(column)?,
        GridMsg::InsertRowAtSelection => {
            grid.insert_row_at_selection()?;
        }
        GridMsg::InsertColumnAtSelection => grid.insert_column_at_selection()?,
    }

    Ok(Some(redraw(before, grid.selection())))
}

fn focus_if_changed(before: Selection, after: Selection) -> Option<Cmd> {
    if before == after {
        None
    } else {
        Some(Cmd::FocusCell(after))
    }
}

/// Redraw after a data, filter or sort change, refocusing if the selection moved
fn redraw(before: Selection, after: Selection) -> Cmd {
    match focus_if_changed(before, after) {
        Some(focus) => Cmd::Batch(vec![Cmd::Redraw, focus]),
        None => Cmd::Redraw,
    }
}
