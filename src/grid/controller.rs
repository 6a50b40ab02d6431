//! Grid controller
//!
//! Owns the model, the filter/sort state and the selection. The view is
//! recomputed on every read, so callers never observe a view derived from
//! an older model state.

use super::error::{GridError, GridResult};
use super::label::column_label;
use super::model::{GridModel, RowId};
use super::navigation::{self, Intent, Selection};
use super::view::{compute_view, FilterSet, SortKey, View};

/// State behind one grid editor
#[derive(Debug, Clone)]
pub struct GridController {
    model: GridModel,
    filters: FilterSet,
    sort: Option<SortKey>,
    selection: Selection,
}

impl GridController {
    /// Create a controller with the selection on the first cell
    pub fn new(model: GridModel) -> Self {
        let selection = Selection::new(model.first_row_id(), 0);
        Self {
            model,
            filters: FilterSet::new(),
            sort: None,
            selection,
        }
    }

    /// Create a controller over an empty grid
    pub fn with_size(rows: usize, columns: usize) -> GridResult<Self> {
        Ok(Self::new(GridModel::new(rows, columns)?))
    }

    pub fn model(&self) -> &GridModel {
        &self.model
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort
    }

    /// Current filtered and sorted view
    pub fn view(&self) -> View<'_> {
        compute_view(self.model.rows(), &self.filters, self.sort)
    }

    /// Selection as last stored (its row may be hidden by a filter)
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Selection re-anchored against the current view
    pub fn resolved_selection(&self) -> Option<Selection> {
        navigation::resolve_selection(&self.view(), self.selection)
    }

    /// Header labels for every column
    pub fn column_labels(&self) -> Vec<String> {
        (0..self.model.column_count()).map(column_label).collect()
    }

    // === Mutation ===

    pub fn set_cell(&mut self, row_id: RowId, column: usize, value: impl Into<String>) -> GridResult<()> {
        self.model.set_cell(row_id, column, value)?;
        self.reanchor();
        Ok(())
    }

    /// Replace the value of the selected cell
    ///
    /// Acts on the selection as resolved against the current view, so an edit
    /// never lands on a row the filters hide.
    pub fn edit_selected(&mut self, value: impl Into<String>) -> GridResult<()> {
        let selection = self.visible_selection()?;
        self.model.set_cell(selection.row_id, selection.column, value)?;
        self.selection = selection;
        self.reanchor();
        Ok(())
    }

    pub fn insert_row_before(&mut self, row_id: RowId) -> GridResult<RowId> {
        let new_id = self.model.insert_row_before(row_id)?;
        self.reanchor();
        Ok(new_id)
    }

    pub fn insert_column_before(&mut self, column: usize) -> GridResult<()> {
        self.model.insert_column_before(column)?;
        self.reanchor();
        Ok(())
    }

    /// Insert an empty row above the selected row
    pub fn insert_row_at_selection(&mut self) -> GridResult<RowId> {
        let selection = self.visible_selection()?;
        let new_id = self.model.insert_row_before(selection.row_id)?;
        self.selection = selection;
        self.reanchor();
        Ok(new_id)
    }

    /// Insert an empty column at the selected column
    ///
    /// The selection keeps its index and therefore lands on the new column.
    pub fn insert_column_at_selection(&mut self) -> GridResult<()> {
        let selection = self.visible_selection()?;
        self.model.insert_column_before(selection.column)?;
        self.selection = selection;
        self.reanchor();
        Ok(())
    }

    // === Filter / sort ===

    /// Set the filter pattern for a column (empty clears it)
    pub fn set_filter(&mut self, column: usize, pattern: impl Into<String>) {
        let pattern = pattern.into();
        tracing::debug!(column, %pattern, "filter changed");
        self.filters.set(column, pattern);
        self.reanchor();
    }

    pub fn clear_filters(&mut self) {
        tracing::debug!("filters cleared");
        self.filters.clear();
        self.reanchor();
    }

    /// Toggle sorting on a column
    ///
    /// Toggling the ascending column flips it to descending; anything else
    /// (a new column, or the descending column) sorts ascending.
    pub fn toggle_sort(&mut self, column: usize) -> SortKey {
        let key = match self.sort {
            Some(current) if current.column == column => SortKey {
                column,
                direction: current.direction.reversed(),
            },
            _ => SortKey::ascending(column),
        };
        tracing::debug!(column, direction = ?key.direction, "sort changed");
        self.sort = Some(key);
        self.reanchor();
        key
    }

    pub fn clear_sort(&mut self) {
        tracing::debug!("sort cleared");
        self.sort = None;
        self.reanchor();
    }

    // === Selection ===

    /// Move the selection inside the current view
    pub fn navigate(&mut self, intent: Intent) -> Selection {
        let next = navigation::move_selection(&self.view(), self.selection, intent);
        self.selection = next;
        next
    }

    /// Focus a specific cell (e.g. from a click)
    ///
    /// Only visible rows can take focus.
    pub fn select(&mut self, row_id: RowId, column: usize) -> GridResult<Selection> {
        if !self.model.contains(row_id) {
            return Err(GridError::NotFound(row_id));
        }
        if self.view().position(row_id).is_none() {
            return Err(GridError::Hidden(row_id));
        }
        let limit = self.model.column_count();
        if column >= limit {
            return Err(GridError::OutOfRange { column, limit });
        }

        self.selection = Selection::new(row_id, column);
        Ok(self.selection)
    }

    /// Resolved selection, or `NoVisibleRows` when everything is filtered out
    fn visible_selection(&self) -> GridResult<Selection> {
        self.resolved_selection().ok_or(GridError::NoVisibleRows)
    }

    /// Store the selection re-anchored against the current view
    ///
    /// An empty view keeps the stored selection as is.
    fn reanchor(&mut self) {
        if let Some(resolved) = self.resolved_selection() {
            if resolved != self.selection {
                tracing::debug!(from = %self.selection.row_id, to = %resolved.row_id, "selection re-anchored");
                self.selection = resolved;
            }
        }
    }
}
