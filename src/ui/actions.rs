//! Action enum (Intent)
//!
//! User interaction turned into explicit semantic Actions

/// One variant per meaningful key press.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,

    // row-level and input-focusing actions
    FocusInput,     // start typing a new task name
    StartEditing,   // load the selected task into the input
    DeleteSelected,

    // form/generic interaction
    Cancel,      // Esc
    Submit,      // Enter
    Input(char), // typed character
    DeleteChar,  // Backspace
}
