//! User intents: the edits a view layer can request, with the coordinates
//! they act on.
//!
//! Intents are serde-tagged so hosts can carry them over a wire verbatim,
//! e.g. `{"op": "break_row", "at": {"row": 0, "col": 1}}`.

#[cfg(test)]
#[path = "intent_test.rs"]
mod intent_test;

use serde::{Deserialize, Serialize};

use crate::select::Coord;

/// A single user edit, dispatched to the matching transition in
/// [`crate::ops`] by [`crate::engine::Editor::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Intent {
    /// Add an empty row at the end, or immediately after `after`.
    AddRow {
        #[serde(default)]
        after: Option<usize>,
    },
    /// Remove a whole row.
    RemoveRow { row: usize },
    /// Add an empty panel immediately after column `after`, or at the start
    /// of a row with no panels.
    AddPanel {
        row: usize,
        #[serde(default)]
        after: Option<usize>,
    },
    /// Duplicate the panel at `at`, inserting the copy after it.
    DuplicatePanel { at: Coord },
    /// Remove the panel at `at`.
    RemovePanel { at: Coord },
    /// Swap the panel at `at` with its successor.
    MoveForward { at: Coord },
    /// Swap the panel at `at` with its predecessor.
    MoveBack { at: Coord },
    /// Split the row after the panel at `at`; the tail moves to the next row.
    BreakRow { at: Coord },
    /// Merge the row's head, through the panel at `at`, into the previous row.
    UnbreakRow { at: Coord },
    /// Replace a panel's caption.
    SetPanelHeading { at: Coord, text: String },
    /// Replace a row's heading.
    SetRowHeading { row: usize, text: String },
    /// Replace a panel's free text.
    SetContent { at: Coord, text: String },
    /// Replace the board-wide panel width preference.
    SetPanelWidth { value: String },
}

impl Intent {
    /// Whether applying this intent discards user content. The view layer is
    /// expected to confirm these before they reach the engine; see
    /// [`crate::engine::Confirm`].
    #[must_use]
    pub fn is_destructive(&self) -> bool {
        matches!(self, Self::RemoveRow { .. } | Self::RemovePanel { .. })
    }
}
