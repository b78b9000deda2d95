//! State transitions (Update/Dispatch)
//!
//! The dispatch entry point and the four task operations

use super::actions::Action;
use super::state::{App, Mode};
use crate::models::TaskError;

impl App {
    /// Core dispatch. Returns true when the app should exit.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::FocusInput => {
                self.status = None;
                self.mode = Mode::Input;
            }
            Action::StartEditing => {
                if let Some(id) = self.selected_id() {
                    self.start_editing(id);
                    self.status = None;
                    self.mode = Mode::Input;
                }
            }
            Action::DeleteSelected => {
                if let Some(id) = self.selected_id() {
                    self.delete_task(id);
                }
            }

            Action::Submit => self.submit(),
            Action::Cancel => self.cancel(),

            Action::Input(c) => {
                if matches!(self.mode, Mode::Input) {
                    self.draft.push(c);
                }
            }
            Action::DeleteChar => {
                if matches!(self.mode, Mode::Input) {
                    self.draft.pop();
                }
            }
        }
        false
    }

    // ============ navigation ============

    /// Move the cursor up one row.
    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move the cursor down one row.
    pub fn move_down(&mut self) {
        if self.selected + 1 < self.tasks.len() {
            self.selected += 1;
        }
    }

    // ============ the four task operations ============

    /// Append a new task named after the draft. Rejects a blank draft and
    /// changes nothing in that case.
    pub fn add_task(&mut self) -> Result<(), TaskError> {
        if self.draft.trim().is_empty() {
            return Err(TaskError::EmptyName);
        }
        // the name is stored as typed, untrimmed
        self.tasks.add(self.draft.clone());
        self.draft.clear();
        self.status = Some("Task added.".to_string());
        Ok(())
    }

    /// Load a task's name into the draft and switch the submit control to
    /// update mode. Does not touch the list; safe to call repeatedly or to
    /// re-target a different task mid-edit.
    pub fn start_editing(&mut self, id: u64) {
        if let Some(task) = self.tasks.get(id) {
            self.draft = task.name.clone();
            self.editing_id = Some(id);
        }
    }

    /// Replace the edited task's name with the draft. Rejects a blank draft
    /// and changes nothing in that case.
    ///
    /// If the task was deleted while being edited, the list is left alone
    /// but the draft and edit target are still cleared, so the edit is
    /// discarded silently.
    pub fn commit_edit(&mut self) -> Result<(), TaskError> {
        if self.draft.trim().is_empty() {
            return Err(TaskError::EmptyName);
        }
        if let Some(id) = self.editing_id {
            if self.tasks.rename(id, self.draft.clone()) {
                self.status = Some("Task updated.".to_string());
            }
        }
        self.draft.clear();
        self.editing_id = None;
        Ok(())
    }

    /// Remove a task. Leaves `editing_id` alone even if it pointed at the
    /// removed task; a later commit then discards silently.
    pub fn delete_task(&mut self, id: u64) {
        if self.tasks.remove(id) {
            self.status = Some("Task deleted.".to_string());
        }
        self.clamp_selection();
    }

    // ============ generic interaction ============

    /// Enter: dismiss the alert, or submit the draft through whichever
    /// operation the mode predicate selects.
    fn submit(&mut self) {
        if matches!(self.mode, Mode::Alert(_)) {
            self.mode = Mode::Input;
            return;
        }
        let result = if self.editing_id.is_some() {
            self.commit_edit()
        } else {
            self.add_task()
        };
        match result {
            Ok(()) => self.mode = Mode::Browse,
            Err(err) => self.mode = Mode::Alert(err.to_string()),
        }
    }

    /// Esc: dismiss the alert, or hand focus back to the list. Focus change
    /// only; the draft and the edit target survive.
    fn cancel(&mut self) {
        match self.mode {
            Mode::Alert(_) => self.mode = Mode::Input,
            Mode::Input => {
                self.status = None;
                self.mode = Mode::Browse;
            }
            Mode::Browse => {}
        }
    }
}
