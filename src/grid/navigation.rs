//! Cell navigation over the visible view
//!
//! Handles arrow key movement and Tab/Shift+Tab. Navigation works on view
//! positions, never storage order, and is total: a selection whose row has
//! been filtered out is re-anchored at the first visible row.

use serde::{Deserialize, Serialize};

use super::model::RowId;
use super::view::View;

/// Abstract movement request, decoupled from any input device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Up,
    Down,
    Left,
    Right,
    /// Tab: same as `Right`
    Next,
    /// Shift+Tab: same as `Left`
    Prev,
}

/// The single active cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub row_id: RowId,
    pub column: usize,
}

impl Selection {
    pub fn new(row_id: RowId, column: usize) -> Self {
        Self { row_id, column }
    }
}

/// Re-anchor a selection against the current view
///
/// Keeps the selection when its row is visible; otherwise moves it to the
/// first visible row. The column is clamped to the view's width. Returns
/// `None` when nothing is visible.
pub fn resolve_selection(view: &View<'_>, selection: Selection) -> Option<Selection> {
    let (row_index, column) = locate(view, selection)?;
    let row = view.get(row_index)?;
    Some(Selection::new(row.id(), column))
}

/// Apply a movement intent to a selection
///
/// Up/Down clamp at the first/last visible row. Left/Right/Next/Prev wrap
/// to the other end of the row and step one row, clamping at the first/last
/// row. An empty view leaves the selection unchanged.
pub fn move_selection(view: &View<'_>, selection: Selection, intent: Intent) -> Selection {
    let Some((row_index, column)) = locate(view, selection) else {
        return selection;
    };

    let last_row = view.len() - 1;
    let col_count = view.column_count();

    let (new_row, new_col) = match intent {
        Intent::Up => (row_index.saturating_sub(1), column),
        Intent::Down => ((row_index + 1).min(last_row), column),
        Intent::Right | Intent::Next => {
            if column + 1 >= col_count {
                ((row_index + 1).min(last_row), 0)
            } else {
                (row_index, column + 1)
            }
        }
        Intent::Left | Intent::Prev => {
            if column == 0 {
                (row_index.saturating_sub(1), col_count - 1)
            } else {
                (row_index, column - 1)
            }
        }
    };

    let next = match view.get(new_row) {
        Some(row) => Selection::new(row.id(), new_col),
        None => selection,
    };
    tracing::trace!(
        ?intent,
        from_row = row_index,
        from_col = column,
        to_row = new_row,
        to_col = new_col,
        "selection moved"
    );
    next
}

/// Visible (row index, clamped column) of a selection, falling back to row 0
fn locate(view: &View<'_>, selection: Selection) -> Option<(usize, usize)> {
    if view.is_empty() {
        return None;
    }

    let row_index = view.position(selection.row_id).unwrap_or_else(|| {
        tracing::debug!(row = %selection.row_id, "selected row not visible, anchoring at first row");
        0
    });
    let column = selection.column.min(view.column_count().saturating_sub(1));
    Some((row_index, column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::view::{compute_view, FilterSet};
    use crate::grid::GridModel;

    fn make_model(rows: usize, cols: usize) -> GridModel {
        let raw = (0..rows)
            .map(|r| (0..cols).map(|c| format!("r{}c{}", r, c)).collect())
            .collect();
        GridModel::from_rows(raw).unwrap()
    }

    /// Move from (row, col) by view position, returning the new (row, col)
    fn step(model: &GridModel, from: (usize, usize), intent: Intent) -> (usize, usize) {
        let view = compute_view(model.rows(), &FilterSet::new(), None);
        let start = Selection::new(view.get(from.0).unwrap().id(), from.1);
        let next = move_selection(&view, start, intent);
        (view.position(next.row_id).unwrap(), next.column)
    }

    #[test]
    fn test_move_down_and_up() {
        let model = make_model(5, 3);
        assert_eq!(step(&model, (0, 1), Intent::Down), (1, 1));
        assert_eq!(step(&model, (3, 2), Intent::Up), (2, 2));
    }

    #[test]
    fn test_vertical_movement_clamps() {
        let model = make_model(5, 3);
        assert_eq!(step(&model, (0, 0), Intent::Up), (0, 0));
        assert_eq!(step(&model, (4, 2), Intent::Down), (4, 2));
    }

    #[test]
    fn test_move_right_wraps_to_next_row() {
        let model = make_model(3, 2);
        assert_eq!(step(&model, (0, 0), Intent::Right), (0, 1));
        assert_eq!(step(&model, (0, 1), Intent::Right), (1, 0));
    }

    #[test]
    fn test_move_right_on_last_row_clamps_row() {
        let model = make_model(3, 2);
        assert_eq!(step(&model, (2, 1), Intent::Right), (2, 0));
    }

    #[test]
    fn test_move_left_wraps_to_previous_row() {
        let model = make_model(3, 3);
        assert_eq!(step(&model, (1, 1), Intent::Left), (1, 0));
        assert_eq!(step(&model, (1, 0), Intent::Left), (0, 2));
        assert_eq!(step(&model, (0, 0), Intent::Left), (0, 2));
    }

    #[test]
    fn test_tab_matches_arrows() {
        let model = make_model(3, 3);
        for from in [(0, 0), (0, 2), (1, 0), (2, 2)] {
            assert_eq!(
                step(&model, from, Intent::Next),
                step(&model, from, Intent::Right)
            );
            assert_eq!(
                step(&model, from, Intent::Prev),
                step(&model, from, Intent::Left)
            );
        }
    }

    #[test]
    fn test_single_cell_grid_is_fixed_point() {
        let model = make_model(1, 1);
        let view = compute_view(model.rows(), &FilterSet::new(), None);
        let sel = Selection::new(model.first_row_id(), 0);

        for intent in [
            Intent::Up,
            Intent::Down,
            Intent::Left,
            Intent::Right,
            Intent::Next,
            Intent::Prev,
        ] {
            assert_eq!(move_selection(&view, sel, intent), sel);
        }
    }

    #[test]
    fn test_navigation_follows_sorted_order() {
        use crate::grid::view::SortKey;

        let raw = vec![
            vec!["c".to_string()],
            vec!["a".to_string()],
            vec!["b".to_string()],
        ];
        let model = GridModel::from_rows(raw).unwrap();
        let view = compute_view(model.rows(), &FilterSet::new(), Some(SortKey::ascending(0)));

        // "a" is stored second but shown first; Down lands on "b", not "c"
        let sel = Selection::new(model.rows()[1].id(), 0);
        let next = move_selection(&view, sel, Intent::Down);
        assert_eq!(next.row_id, model.rows()[2].id());
    }

    #[test]
    fn test_stale_selection_anchors_at_first_row() {
        let model = make_model(4, 2);
        let mut filters = FilterSet::new();
        filters.set(0, "r2");
        let view = compute_view(model.rows(), &filters, None);
        assert_eq!(view.len(), 1);

        let hidden = Selection::new(model.rows()[0].id(), 1);
        let next = move_selection(&view, hidden, Intent::Up);
        assert_eq!(next, Selection::new(model.rows()[2].id(), 1));
    }

    #[test]
    fn test_empty_view_returns_selection() {
        let model = make_model(2, 2);
        let mut filters = FilterSet::new();
        filters.set(0, "nothing matches");
        let view = compute_view(model.rows(), &filters, None);

        let sel = Selection::new(model.first_row_id(), 1);
        assert_eq!(move_selection(&view, sel, Intent::Down), sel);
        assert_eq!(resolve_selection(&view, sel), None);
    }

    #[test]
    fn test_out_of_range_column_is_clamped() {
        let model = make_model(2, 3);
        let view = compute_view(model.rows(), &FilterSet::new(), None);
        let sel = Selection::new(model.first_row_id(), 10);

        let resolved = resolve_selection(&view, sel).unwrap();
        assert_eq!(resolved.column, 2);
        assert_eq!(move_selection(&view, sel, Intent::Left).column, 1);
    }
}
