//! Keyboard event mapping (Input -> Action)
//!
//! Turns key events into Actions based on the current mode

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, Mode};

/// Map a key press to an Action for the current mode.
pub fn get_action(mode: &Mode, key: KeyCode) -> Option<Action> {
    match mode {
        Mode::Browse => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char('a') | KeyCode::Char('i') => Some(Action::FocusInput),
            KeyCode::Char('e') => Some(Action::StartEditing),
            KeyCode::Char('d') => Some(Action::DeleteSelected),
            _ => None,
        },
        Mode::Input => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        Mode::Alert(_) => match key {
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },
    }
}

/// Handle one key event. Returns true when the app should exit.
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(&app.mode, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_keys() {
        let mode = Mode::Browse;
        assert_eq!(get_action(&mode, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(get_action(&mode, KeyCode::Char('e')), Some(Action::StartEditing));
        assert_eq!(get_action(&mode, KeyCode::Char('d')), Some(Action::DeleteSelected));
        assert_eq!(get_action(&mode, KeyCode::Char('i')), Some(Action::FocusInput));
        // free typing is not an action while browsing
        assert_eq!(get_action(&mode, KeyCode::Char('x')), None);
    }

    #[test]
    fn test_input_keys() {
        let mode = Mode::Input;
        assert_eq!(get_action(&mode, KeyCode::Char('q')), Some(Action::Input('q')));
        assert_eq!(get_action(&mode, KeyCode::Enter), Some(Action::Submit));
        assert_eq!(get_action(&mode, KeyCode::Esc), Some(Action::Cancel));
        assert_eq!(get_action(&mode, KeyCode::Backspace), Some(Action::DeleteChar));
    }

    #[test]
    fn test_alert_keys() {
        let mode = Mode::Alert("msg".to_string());
        assert_eq!(get_action(&mode, KeyCode::Enter), Some(Action::Submit));
        assert_eq!(get_action(&mode, KeyCode::Esc), Some(Action::Cancel));
        assert_eq!(get_action(&mode, KeyCode::Char('x')), None);
    }
}
