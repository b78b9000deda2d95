//! App state definition (Model)
//!
//! Holds the screen state struct and related enums

use crate::models::TaskList;

/// Screen state. Everything the view shows is derived from here, and every
/// mutation is followed by a full redraw.
pub struct App {
    pub tasks: TaskList,
    pub draft: String,           // uncommitted input text, shared by add and update
    pub editing_id: Option<u64>, // None means add mode, Some(id) means update mode
    pub selected: usize,         // list cursor
    pub mode: Mode,
    pub status: Option<String>,
}

/// Which surface currently owns the keyboard.
///
/// Orthogonal to add/update mode: that is decided by `editing_id` alone.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Browse,
    Input,
    Alert(String), // blocking validation alert, String is the message
}

impl App {
    /// Create a fresh screen: empty list, empty draft, add mode.
    pub fn new() -> Self {
        Self {
            tasks: TaskList::new(),
            draft: String::new(),
            editing_id: None,
            selected: 0,
            mode: Mode::Browse,
            status: None,
        }
    }

    /// Keep the cursor on a real row after the list shrinks.
    pub fn clamp_selection(&mut self) {
        if self.tasks.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.tasks.len() {
            self.selected = self.tasks.len() - 1;
        }
    }

    /// Id of the task under the cursor.
    pub fn selected_id(&self) -> Option<u64> {
        self.tasks.task_at(self.selected).map(|task| task.id)
    }

    /// Label of the submit control, chosen by the single mode predicate.
    pub fn submit_label(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Update Task"
        } else {
            "Add Task"
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
