//! Message types for the Elm-style architecture
//!
//! Every request a UI can make of the grid flows through [`GridMsg`].

use crate::grid::{Intent, RowId};

/// Grid requests (navigation, edits, filter/sort, structure)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridMsg {
    // === Navigation ===
    /// Arrow keys / Tab / Shift+Tab
    Navigate(Intent),
    /// Focus a cell directly (mouse click)
    SelectCell { row_id: RowId, column: usize },

    // === Editing ===
    /// Replace a cell's value
    EditCell {
        row_id: RowId,
        column: usize,
        value: String,
    },
    /// Replace the selected cell's value
    EditSelected(String),

    // === Filter / Sort ===
    /// Change a column's filter text (empty clears it)
    SetFilter { column: usize, pattern: String },
    ClearFilters,
    /// Header sort button: ascending, then descending on repeat
    ToggleSort(usize),
    ClearSort,

    // === Structure ===
    InsertRowBefore(RowId),
    InsertColumnBefore(usize),
    /// "Insert Row" button: above the selected row
    InsertRowAtSelection,
    /// "Insert Column" button: at the selected column
    InsertColumnAtSelection,
}
