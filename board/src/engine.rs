//! Editor session: owns the current board and selection and applies intents.
//!
//! Separated from the pure transitions in [`crate::ops`] so the transition
//! logic stays a function of (board, intent) while this layer threads the
//! selection through every edit via [`crate::select::next_selection`].

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::intent::Intent;
use crate::model::Board;
use crate::ops::{self, Applied, EditError};
use crate::select::{self, Selection};

/// Capability supplied by the view layer to confirm destructive intents.
/// The engine itself never prompts.
pub trait Confirm {
    /// Returns `true` when the user accepted the prompt.
    fn confirm(&self, message: &str) -> bool;
}

/// What became of an intent passed through [`Editor::apply_with_confirm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The transition was applied.
    Applied,
    /// The user declined the confirmation prompt; nothing changed.
    Declined,
}

/// A live editing session over one board.
pub struct Editor {
    board: Board,
    selection: Selection,
}

impl Editor {
    /// Start a session with no selection.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self { board, selection: None }
    }

    /// The current board snapshot.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consume the session, keeping the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// The currently selected panel coordinate, if any.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Record a view-layer focus change. A coordinate that does not address
    /// a panel clears the selection instead of dangling.
    pub fn select(&mut self, coord: Selection) {
        self.selection = coord.filter(|at| self.board.panel(*at).is_some());
    }

    /// Apply an intent, replacing the board and shifting the selection.
    ///
    /// # Errors
    ///
    /// Returns the rejection unchanged from [`crate::ops`]; the session still
    /// holds the board and selection it had before the call.
    pub fn apply(&mut self, intent: &Intent) -> Result<(), EditError> {
        let Applied { board, change } = self.dispatch(intent)?;
        self.selection = select::next_selection(self.selection, &change);
        self.board = board;
        Ok(())
    }

    /// Apply an intent, consulting `confirm` first when the intent is
    /// destructive.
    ///
    /// # Errors
    ///
    /// Same contract as [`Editor::apply`]; a declined prompt is not an error.
    pub fn apply_with_confirm(
        &mut self,
        intent: &Intent,
        confirm: &dyn Confirm,
    ) -> Result<Disposition, EditError> {
        if intent.is_destructive() && !confirm.confirm(&self.confirm_message(intent)) {
            return Ok(Disposition::Declined);
        }
        self.apply(intent)?;
        Ok(Disposition::Applied)
    }

    fn dispatch(&self, intent: &Intent) -> Result<Applied, EditError> {
        let board = &self.board;
        match intent {
            Intent::AddRow { after } => ops::add_row(board, *after),
            Intent::RemoveRow { row } => ops::remove_row(board, *row),
            Intent::AddPanel { row, after } => ops::add_panel(board, *row, *after),
            Intent::DuplicatePanel { at } => ops::duplicate_panel(board, *at),
            Intent::RemovePanel { at } => ops::remove_panel(board, *at),
            Intent::MoveForward { at } => ops::move_forward(board, *at),
            Intent::MoveBack { at } => ops::move_back(board, *at),
            Intent::BreakRow { at } => ops::break_row(board, *at),
            Intent::UnbreakRow { at } => ops::unbreak_row(board, *at),
            Intent::SetPanelHeading { at, text } => ops::set_panel_heading(board, *at, text),
            Intent::SetRowHeading { row, text } => ops::set_row_heading(board, *row, text),
            Intent::SetContent { at, text } => ops::set_content(board, *at, text),
            Intent::SetPanelWidth { value } => Ok(ops::set_panel_width(board, value)),
        }
    }

    fn confirm_message(&self, intent: &Intent) -> String {
        match intent {
            Intent::RemoveRow { row } => {
                let name = self
                    .board
                    .row(*row)
                    .map(|r| r.name.as_str())
                    .filter(|name| !name.is_empty());
                match name {
                    Some(name) => format!("Delete \"{name}\"?"),
                    None => "Delete this row?".to_owned(),
                }
            }
            Intent::RemovePanel { .. } => "Delete the selected panel?".to_owned(),
            _ => String::new(),
        }
    }
}
