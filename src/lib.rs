//! cellgrid - in-memory grid engine
//!
//! This crate provides the data engine behind a spreadsheet-style grid
//! editor: a rectangular matrix of text cells, a filtered and sorted view
//! over it, and keyboard navigation that follows what is visible. UI
//! integration follows the Elm Architecture pattern: [`GridMsg`] in,
//! [`update`](update::update) applies it, [`Cmd`] out.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod grid;
pub mod messages;
pub mod render;
pub mod script;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use grid::{GridController, GridError, GridModel, Intent, RowId, Selection};
pub use messages::GridMsg;
