//! Filter/sort pipeline
//!
//! Derives the visible, ordered projection of a grid without touching
//! storage. A [`View`] borrows rows from the [`GridModel`](super::GridModel),
//! so the model cannot be mutated while a view is alive and every read has
//! to recompute it.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::model::{Row, RowId};
use crate::util::text::{collate, contains_ignore_case, parse_leading_float};

/// Per-column substring filters
///
/// Empty patterns are never stored; setting one clears the column's filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    patterns: BTreeMap<usize, String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pattern for a column (empty pattern removes the filter)
    pub fn set(&mut self, col: usize, pattern: impl Into<String>) {
        let pattern = pattern.into();
        if pattern.is_empty() {
            self.patterns.remove(&col);
        } else {
            self.patterns.insert(col, pattern);
        }
    }

    pub fn get(&self, col: usize) -> Option<&str> {
        self.patterns.get(&col).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.patterns.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Active (column, pattern) pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.patterns.iter().map(|(&col, p)| (col, p.as_str()))
    }

    /// Whether a row satisfies every filter
    ///
    /// Filters on columns the row does not have are ignored.
    pub fn matches(&self, row: &Row) -> bool {
        self.iter().all(|(col, pattern)| match row.cell(col) {
            Some(value) => contains_ignore_case(value, pattern),
            None => true,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Column and direction to sort the view by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub column: usize,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn ascending(column: usize) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: usize) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }
}

/// Stand-in for the whole numeric block when a number meets text
const NUMBER_ANCHOR: &str = "0";

/// How a cell value takes part in ordering
#[derive(Debug, Clone, Copy, PartialEq)]
enum SortValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl<'a> SortValue<'a> {
    fn classify(value: &'a str) -> Self {
        match parse_leading_float(value) {
            Some(n) => SortValue::Number(n),
            None => SortValue::Text(value),
        }
    }
}

/// Compare two cell values in ascending order
///
/// Two numeric values compare numerically and two text values by locale
/// collation. A number facing text collates as `"0"`, so the numbers form one
/// block in the collation order: empty cells and punctuation-led text sort
/// before it, letters after it. The ordering is total.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (SortValue::classify(a), SortValue::classify(b)) {
        (SortValue::Number(x), SortValue::Number(y)) => {
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (SortValue::Text(x), SortValue::Text(y)) => collate(x, y),
        (SortValue::Number(_), SortValue::Text(y)) => collate(NUMBER_ANCHOR, y),
        (SortValue::Text(x), SortValue::Number(_)) => collate(x, NUMBER_ANCHOR),
    }
}

/// Owned copy of a visible row, for handing to a UI or serializing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSnapshot {
    pub id: RowId,
    /// Zero-based position in the view
    pub position: usize,
    pub cells: Vec<String>,
}

/// Ordered, filtered projection of grid rows
#[derive(Debug, Clone)]
pub struct View<'a> {
    rows: Vec<&'a Row>,
}

impl<'a> View<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Row> {
        self.rows.get(index).copied()
    }

    pub fn first(&self) -> Option<&'a Row> {
        self.get(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Row> + '_ {
        self.rows.iter().copied()
    }

    /// Visible position of a row, if it passed the filters
    pub fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id() == id)
    }

    pub fn row_ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|r| r.id()).collect()
    }

    /// Column count of the visible rows (0 for an empty view)
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells().len()).unwrap_or(0)
    }

    pub fn snapshot(&self) -> Vec<RowSnapshot> {
        self.rows
            .iter()
            .enumerate()
            .map(|(position, row)| RowSnapshot {
                id: row.id(),
                position,
                cells: row.cells().to_vec(),
            })
            .collect()
    }
}

/// Filter then sort `rows` into a view
///
/// The sort is stable, so rows that compare equal keep their storage order.
/// A sort key naming a column that does not exist leaves the order untouched.
pub fn compute_view<'a>(rows: &'a [Row], filters: &FilterSet, sort: Option<SortKey>) -> View<'a> {
    let mut visible: Vec<&'a Row> = rows.iter().filter(|row| filters.matches(row)).collect();

    if let Some(key) = sort {
        let column_exists = visible.first().map_or(false, |r| key.column < r.cells().len());
        if column_exists {
            visible.sort_by(|a, b| {
                let ordering = compare_cells(
                    a.cell(key.column).unwrap_or(""),
                    b.cell(key.column).unwrap_or(""),
                );
                key.direction.apply(ordering)
            });
        }
    }

    tracing::trace!(
        total = rows.len(),
        visible = visible.len(),
        filters = filters.patterns.len(),
        sorted = sort.is_some(),
        "view computed"
    );
    View { rows: visible }
}
