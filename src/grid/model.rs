//! Grid data model types
//!
//! Rows carry a stable [`RowId`] that survives insertion, filtering and
//! sorting; positions are only meaningful inside a particular view.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{GridError, GridResult};

/// Opaque, stable identifier for a row
///
/// Allocated from a per-model monotonic counter and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(u64);

impl RowId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// A single row of text cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    id: RowId,
    cells: Vec<String>,
}

impl Row {
    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Get cell value, or `None` past the last column
    pub fn cell(&self, col: usize) -> Option<&str> {
        self.cells.get(col).map(String::as_str)
    }
}

/// Rectangular matrix of text cells
///
/// Always holds at least one row and one column, and every row has exactly
/// `column_count()` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    rows: Vec<Row>,
    next_id: u64,
}

impl GridModel {
    /// Create a grid of empty cells
    pub fn new(row_count: usize, column_count: usize) -> GridResult<Self> {
        if row_count == 0 || column_count == 0 {
            return Err(GridError::Empty);
        }

        let mut model = Self {
            rows: Vec::with_capacity(row_count),
            next_id: 0,
        };
        for _ in 0..row_count {
            let row = model.blank_row(column_count);
            model.rows.push(row);
        }
        Ok(model)
    }

    /// Create a grid from raw rows
    ///
    /// Ragged input is padded with empty cells up to the widest row.
    pub fn from_rows(raw_rows: Vec<Vec<String>>) -> GridResult<Self> {
        let column_count = raw_rows.iter().map(|r| r.len()).max().unwrap_or(0);
        if raw_rows.is_empty() || column_count == 0 {
            return Err(GridError::Empty);
        }

        let mut model = Self {
            rows: Vec::with_capacity(raw_rows.len()),
            next_id: 0,
        };
        for mut cells in raw_rows {
            cells.resize(column_count, String::new());
            let id = model.allocate_id();
            model.rows.push(Row { id, cells });
        }
        Ok(model)
    }

    /// Get number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get number of columns
    pub fn column_count(&self) -> usize {
        self.rows[0].cells.len()
    }

    /// Rows in storage order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Id of the first row in storage order
    pub fn first_row_id(&self) -> RowId {
        self.rows[0].id
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.position(id).is_some()
    }

    /// Storage position of a row
    pub fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Get cell value by row id and column
    pub fn cell(&self, id: RowId, col: usize) -> Option<&str> {
        self.row(id).and_then(|r| r.cell(col))
    }

    /// Replace one cell's value
    pub fn set_cell(&mut self, id: RowId, col: usize, value: impl Into<String>) -> GridResult<()> {
        let column_count = self.column_count();
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(GridError::NotFound(id))?;
        if col >= column_count {
            return Err(GridError::OutOfRange {
                column: col,
                limit: column_count,
            });
        }

        row.cells[col] = value.into();
        tracing::debug!(row = %id, col, "cell updated");
        Ok(())
    }

    /// Insert an empty row immediately before `id`, returning the new row's id
    pub fn insert_row_before(&mut self, id: RowId) -> GridResult<RowId> {
        let index = self.position(id).ok_or(GridError::NotFound(id))?;
        let row = self.blank_row(self.column_count());
        let new_id = row.id;
        self.rows.insert(index, row);

        tracing::debug!(before = %id, new = %new_id, index, "row inserted");
        Ok(new_id)
    }

    /// Insert an empty cell at `col` in every row
    ///
    /// `col == column_count()` appends a column.
    pub fn insert_column_before(&mut self, col: usize) -> GridResult<()> {
        let column_count = self.column_count();
        // Validate before touching any row so a failure leaves every row intact
        if col > column_count {
            return Err(GridError::OutOfRange {
                column: col,
                limit: column_count,
            });
        }

        for row in &mut self.rows {
            row.cells.insert(col, String::new());
        }

        debug_assert!(self.rows.iter().all(|r| r.cells.len() == column_count + 1));
        tracing::debug!(col, columns = column_count + 1, "column inserted");
        Ok(())
    }

    fn allocate_id(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        id
    }

    fn blank_row(&mut self, column_count: usize) -> Row {
        Row {
            id: self.allocate_id(),
            cells: vec![String::new(); column_count],
        }
    }
}
