//! Selection-coordinate maintenance.
//!
//! The selected panel is addressed by position, not id, so every operation
//! that changes row or panel ordering invalidates or shifts it. Operations
//! report what they did as a [`Change`] and [`next_selection`] maps the
//! previous selection through it — one routine instead of per-operation
//! bookkeeping.

#[cfg(test)]
#[path = "select_test.rs"]
mod select_test;

use serde::{Deserialize, Serialize};

/// A 0-based (row, column) coordinate addressing a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The currently selected panel, if any.
pub type Selection = Option<Coord>;

/// Structural description of what an operation did to the board tree.
///
/// All coordinates refer to positions *before* the change was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Content-only edit, or a boundary no-op; ordering and cardinality
    /// untouched.
    None,
    /// A row was inserted at `row`.
    RowInserted { row: usize },
    /// The row at `row` was removed.
    RowRemoved { row: usize },
    /// A panel was inserted at the coordinate.
    PanelInserted { row: usize, col: usize },
    /// The panel at the coordinate was removed.
    PanelRemoved { row: usize, col: usize },
    /// The panels at columns `a` and `b` of `row` swapped places.
    PanelsSwapped { row: usize, a: usize, b: usize },
    /// Row `row` kept columns `[0, col)`; the remaining `moved` panels were
    /// prepended to the next row (a fresh one when `row` was last).
    RowSplit { row: usize, col: usize, moved: usize },
    /// Row `row` kept columns `[col, end)`; the first `col` panels were
    /// appended to the previous row, which held `prev_len` panels. When
    /// `prev_created`, that previous row is a fresh one prepended at index 0.
    RowMerged { row: usize, col: usize, prev_len: usize, prev_created: bool },
}

/// Map a selection through a structural change.
///
/// Insertions select the new panel; removing the selected panel (or its row)
/// clears the selection; everything else shifts so the selection keeps
/// addressing the same panel it did before the change.
#[must_use]
pub fn next_selection(selection: Selection, change: &Change) -> Selection {
    match *change {
        Change::None => selection,
        Change::PanelInserted { row, col } => Some(Coord::new(row, col)),
        Change::PanelRemoved { row, col } => {
            let sel = selection?;
            if sel.row == row && sel.col == col {
                None
            } else if sel.row == row && sel.col > col {
                Some(Coord::new(row, sel.col - 1))
            } else {
                Some(sel)
            }
        }
        Change::RowInserted { row } => {
            let sel = selection?;
            if sel.row >= row {
                Some(Coord::new(sel.row + 1, sel.col))
            } else {
                Some(sel)
            }
        }
        Change::RowRemoved { row } => {
            let sel = selection?;
            match sel.row.cmp(&row) {
                std::cmp::Ordering::Less => Some(sel),
                std::cmp::Ordering::Equal => None,
                std::cmp::Ordering::Greater => Some(Coord::new(sel.row - 1, sel.col)),
            }
        }
        Change::PanelsSwapped { row, a, b } => {
            let sel = selection?;
            if sel.row == row && sel.col == a {
                Some(Coord::new(row, b))
            } else if sel.row == row && sel.col == b {
                Some(Coord::new(row, a))
            } else {
                Some(sel)
            }
        }
        Change::RowSplit { row, col, moved } => {
            let sel = selection?;
            if sel.row == row && sel.col >= col {
                Some(Coord::new(row + 1, sel.col - col))
            } else if sel.row == row + 1 {
                Some(Coord::new(sel.row, sel.col + moved))
            } else {
                Some(sel)
            }
        }
        Change::RowMerged { row, col, prev_len, prev_created } => {
            let sel = selection?;
            if prev_created {
                // A fresh receiving row appeared at index 0; the head panels
                // land in it at their old columns, everything else moves down.
                if sel.row == 0 && sel.col >= col {
                    Some(Coord::new(1, sel.col - col))
                } else if sel.row == 0 {
                    Some(sel)
                } else {
                    Some(Coord::new(sel.row + 1, sel.col))
                }
            } else if sel.row == row && sel.col < col {
                Some(Coord::new(row - 1, prev_len + sel.col))
            } else if sel.row == row {
                Some(Coord::new(row, sel.col - col))
            } else {
                Some(sel)
            }
        }
    }
}
