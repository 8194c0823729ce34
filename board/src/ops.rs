//! Pure board transitions.
//!
//! DESIGN
//! ======
//! Every operation takes the current board by reference and returns a fresh
//! one; the input is never mutated. Each successful transition also reports
//! the [`Change`] it made so the selection rules in [`crate::select`] can
//! shift the selected coordinate without per-operation duplication.
//!
//! ERROR HANDLING
//! ==============
//! A coordinate that does not address an existing row or panel is rejected
//! with [`EditError`] so callers can tell an applied edit from a refused one.
//! Boundary cases with nothing to do (moving the last panel forward, breaking
//! at the last panel) succeed with the board unchanged.

#[cfg(test)]
#[path = "ops_test.rs"]
mod ops_test;

use uuid::Uuid;

use crate::model::{Board, Panel, PanelContent, Row};
use crate::select::{Change, Coord};

/// Result of a successful transition: the next board plus the structural
/// change applied.
#[derive(Debug, Clone)]
pub struct Applied {
    pub board: Board,
    pub change: Change,
}

impl Applied {
    fn unchanged(board: &Board) -> Self {
        Self { board: board.clone(), change: Change::None }
    }
}

/// A rejected transition. The board the operation was called with is still
/// current; nothing was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("row {row} is out of bounds")]
    RowOutOfBounds { row: usize },
    #[error("column {col} is out of bounds in row {row}")]
    ColumnOutOfBounds { row: usize, col: usize },
    #[error("panel at ({row}, {col}) is image-backed and has no text content")]
    NotTextPanel { row: usize, col: usize },
}

fn require_row(board: &Board, row: usize) -> Result<&Row, EditError> {
    board.rows.get(row).ok_or(EditError::RowOutOfBounds { row })
}

fn require_panel(board: &Board, at: Coord) -> Result<&Panel, EditError> {
    let row = require_row(board, at.row)?;
    row.panels.get(at.col).ok_or(EditError::ColumnOutOfBounds { row: at.row, col: at.col })
}

/// Insert a fresh empty row at the end, or immediately after `after`.
pub fn add_row(board: &Board, after: Option<usize>) -> Result<Applied, EditError> {
    let index = match after {
        Some(after) => {
            require_row(board, after)?;
            after + 1
        }
        None => board.rows.len(),
    };
    let mut next = board.clone();
    next.rows.insert(index, Row::new());
    Ok(Applied { board: next, change: Change::RowInserted { row: index } })
}

/// Remove the row at `row`, panels and all. Confirmation of destructive
/// intent is the caller's concern; given a valid index this always applies.
pub fn remove_row(board: &Board, row: usize) -> Result<Applied, EditError> {
    require_row(board, row)?;
    let mut next = board.clone();
    next.rows.remove(row);
    Ok(Applied { board: next, change: Change::RowRemoved { row } })
}

/// Insert a fresh empty-content panel immediately after column `after`, or at
/// the start of a row that has no panels yet.
pub fn add_panel(board: &Board, row: usize, after: Option<usize>) -> Result<Applied, EditError> {
    let panels = &require_row(board, row)?.panels;
    let col = match after {
        Some(after) if after < panels.len() => after + 1,
        Some(after) => return Err(EditError::ColumnOutOfBounds { row, col: after }),
        None => 0,
    };
    let mut next = board.clone();
    next.rows[row].panels.insert(col, Panel::empty());
    Ok(Applied { board: next, change: Change::PanelInserted { row, col } })
}

/// Insert a copy of the panel at `at` immediately after it. The copy gets a
/// fresh id; every other field is carried over verbatim.
pub fn duplicate_panel(board: &Board, at: Coord) -> Result<Applied, EditError> {
    let original = require_panel(board, at)?;
    let copy = Panel { id: Uuid::new_v4(), ..original.clone() };
    let mut next = board.clone();
    next.rows[at.row].panels.insert(at.col + 1, copy);
    Ok(Applied { board: next, change: Change::PanelInserted { row: at.row, col: at.col + 1 } })
}

/// Remove the panel at `at`.
pub fn remove_panel(board: &Board, at: Coord) -> Result<Applied, EditError> {
    require_panel(board, at)?;
    let mut next = board.clone();
    next.rows[at.row].panels.remove(at.col);
    Ok(Applied { board: next, change: Change::PanelRemoved { row: at.row, col: at.col } })
}

/// Swap the panel at `at` with its successor in the same row. Unchanged when
/// the panel is already last.
pub fn move_forward(board: &Board, at: Coord) -> Result<Applied, EditError> {
    require_panel(board, at)?;
    if at.col + 1 == board.rows[at.row].panels.len() {
        return Ok(Applied::unchanged(board));
    }
    let mut next = board.clone();
    next.rows[at.row].panels.swap(at.col, at.col + 1);
    Ok(Applied { board: next, change: Change::PanelsSwapped { row: at.row, a: at.col, b: at.col + 1 } })
}

/// Swap the panel at `at` with its predecessor in the same row. Unchanged
/// when the panel is already first.
pub fn move_back(board: &Board, at: Coord) -> Result<Applied, EditError> {
    require_panel(board, at)?;
    if at.col == 0 {
        return Ok(Applied::unchanged(board));
    }
    let mut next = board.clone();
    next.rows[at.row].panels.swap(at.col - 1, at.col);
    Ok(Applied { board: next, change: Change::PanelsSwapped { row: at.row, a: at.col, b: at.col - 1 } })
}

/// Split the row after the panel at `at`: columns `[0, col]` stay, the rest
/// move to the head of the next row. Splitting the last row appends a fresh
/// row to receive the tail. Unchanged when `col` is at or past the last
/// panel (no tail to move).
pub fn break_row(board: &Board, at: Coord) -> Result<Applied, EditError> {
    let len = require_row(board, at.row)?.panels.len();
    if at.col + 1 >= len {
        return Ok(Applied::unchanged(board));
    }
    let boundary = at.col + 1;
    let mut next = board.clone();
    let tail = next.rows[at.row].panels.split_off(boundary);
    let moved = tail.len();
    if at.row + 1 == next.rows.len() {
        next.rows.push(Row::new());
    }
    let existing = std::mem::take(&mut next.rows[at.row + 1].panels);
    let mut panels = tail;
    panels.extend(existing);
    next.rows[at.row + 1].panels = panels;
    Ok(Applied { board: next, change: Change::RowSplit { row: at.row, col: boundary, moved } })
}

/// Merge the head of the row into the previous row: columns `[0, col]` are
/// appended to the previous row, the row keeps the rest. Merging out of the
/// first row prepends a fresh row to receive the head rather than dropping
/// it. Unchanged when the row has no panels.
pub fn unbreak_row(board: &Board, at: Coord) -> Result<Applied, EditError> {
    let len = require_row(board, at.row)?.panels.len();
    if len == 0 {
        return Ok(Applied::unchanged(board));
    }
    if at.col >= len {
        return Err(EditError::ColumnOutOfBounds { row: at.row, col: at.col });
    }
    let boundary = at.col + 1;
    let prev_created = at.row == 0;
    let mut next = board.clone();
    if prev_created {
        next.rows.insert(0, Row::new());
    }
    let row = if prev_created { 1 } else { at.row };
    let mut head: Vec<Panel> = next.rows[row].panels.drain(..boundary).collect();
    let prev = &mut next.rows[row - 1];
    let prev_len = prev.panels.len();
    prev.panels.append(&mut head);
    Ok(Applied {
        board: next,
        change: Change::RowMerged { row: at.row, col: boundary, prev_len, prev_created },
    })
}

/// Replace the caption of the panel at `at`.
pub fn set_panel_heading(board: &Board, at: Coord, text: &str) -> Result<Applied, EditError> {
    require_panel(board, at)?;
    let mut next = board.clone();
    next.rows[at.row].panels[at.col].name = Some(text.to_owned());
    Ok(Applied { board: next, change: Change::None })
}

/// Replace the heading of the row at `row`.
pub fn set_row_heading(board: &Board, row: usize, text: &str) -> Result<Applied, EditError> {
    require_row(board, row)?;
    let mut next = board.clone();
    next.rows[row].name = text.to_owned();
    Ok(Applied { board: next, change: Change::None })
}

/// Replace the free text of the panel at `at`. An empty panel becomes a text
/// panel; an image panel is rejected — it has no text field, and `src`/`alt`
/// are never altered by this operation.
pub fn set_content(board: &Board, at: Coord, text: &str) -> Result<Applied, EditError> {
    let panel = require_panel(board, at)?;
    if matches!(panel.content, PanelContent::Image { .. }) {
        return Err(EditError::NotTextPanel { row: at.row, col: at.col });
    }
    let mut next = board.clone();
    next.rows[at.row].panels[at.col].content = PanelContent::Text { content: text.to_owned() };
    Ok(Applied { board: next, change: Change::None })
}

/// Replace the board's panel-width preference.
#[must_use]
pub fn set_panel_width(board: &Board, value: &str) -> Applied {
    let mut next = board.clone();
    next.preferences.panel_width = value.to_owned();
    Applied { board: next, change: Change::None }
}
