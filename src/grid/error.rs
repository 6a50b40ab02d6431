//! Error type for grid mutations

use thiserror::Error;

use super::model::RowId;

/// Failures raised by grid mutations and selection requests
///
/// View computation and navigation never fail; only operations that address
/// a specific row or column can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The referenced row does not exist (stale or foreign id)
    #[error("row {0} not found")]
    NotFound(RowId),

    /// The row exists but the current filters hide it
    #[error("row {0} is hidden by the current filters")]
    Hidden(RowId),

    /// Every row is filtered out, so there is no cell to act on
    #[error("no visible rows")]
    NoVisibleRows,

    /// Column index outside the valid range for the operation
    #[error("column {column} out of range (limit {limit})")]
    OutOfRange { column: usize, limit: usize },

    /// Attempted to build a grid with no rows or no columns
    #[error("grid must have at least one row and one column")]
    Empty,
}

pub type GridResult<T> = Result<T, GridError>;
