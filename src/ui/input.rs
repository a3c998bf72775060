//! Key event mapping (Input -> Action)

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode};

/// Map a key press to an Action for the current mode
pub fn get_action(mode: &AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char(' ') => Some(Action::ToggleChecked),
            KeyCode::Char('a') => Some(Action::ToggleSelectAll),
            KeyCode::Char('/') => Some(Action::StartSearch),
            KeyCode::Char('d') => Some(Action::StartDeleteCard),
            KeyCode::Char('x') => Some(Action::DismissBanners),
            _ => None,
        },
        AppMode::Searching => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        AppMode::Confirm(_) => match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::Submit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },
    }
}

/// Handle a key event; returns true when the app should quit
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(&app.mode, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}
