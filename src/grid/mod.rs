//! In-memory grid engine
//!
//! Holds a rectangular matrix of text cells and derives the filtered and
//! sorted view a grid editor displays:
//! - Stable row ids, independent of position
//! - Row/column insertion that keeps the matrix rectangular
//! - Per-column substring filters and a numeric-aware stable sort
//! - Arrow/Tab navigation over the *visible* row order
//!
//! # Architecture
//!
//! ```text
//! GridController
//! ├── GridModel      (rows + cells, id allocation)
//! ├── FilterSet      (column -> pattern)
//! ├── Option<SortKey>
//! └── Selection      (row id + column)
//!
//! view()     = compute_view(model.rows(), filters, sort)   // recomputed per read
//! navigate() = move_selection(view, selection, intent)
//! ```

mod controller;
mod error;
mod label;
mod model;
mod navigation;
mod view;

pub use controller::GridController;
pub use error::{GridError, GridResult};
pub use label::{cell_reference, column_label, parse_cell_reference, parse_column_label};
pub use model::{GridModel, Row, RowId};
pub use navigation::{move_selection, resolve_selection, Intent, Selection};
pub use view::{compare_cells, compute_view, FilterSet, RowSnapshot, SortDirection, SortKey, View};
