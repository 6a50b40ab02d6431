//! Command types for the Elm-style architecture
//!
//! Commands describe what the UI should do after an update. The grid core
//! never touches focus or rendering itself.

use crate::grid::Selection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Cells, filters or sort changed; re-render the view
    Redraw,
    /// Selection changed; move input focus to this cell
    FocusCell(Selection),
    /// Execute multiple commands (e.g. redraw, then refocus a moved selection)
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw | Cmd::FocusCell(_) => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Selection to focus, if any command asks for one (last one wins)
    pub fn focus_target(&self) -> Option<Selection> {
        match self {
            Cmd::FocusCell(sel) => Some(*sel),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(|c| c.focus_target()),
            _ => None,
        }
    }
}
