use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::AppearanceChanged(mode) => {
            state.set_mode(mode);
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return vec![Action::Quit],
            KeyCode::Char('t') => {
                return vec![Action::RequestAppearance(state.appearance.mode().toggled())]
            }
            _ => {}
        }
    }

    if key.code == KeyCode::Tab {
        state.cycle_focus();
        return vec![];
    }

    match state.focus {
        FocusPanel::Input => handle_input_key(state, key),
        FocusPanel::List => handle_list_key(state, key),
    }
}

fn handle_input_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => state.submit_input(),
        KeyCode::Esc => state.cancel_edit(),
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                state.input.delete_word_back();
            } else {
                state.input.delete_back();
            }
        }
        KeyCode::Delete => state.input.delete_forward(),
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Home => state.input.move_home(),
        KeyCode::End => state.input.move_end(),
        KeyCode::Up => state.move_cursor_up(),
        KeyCode::Down => state.move_cursor_down(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => state.input.move_home(),
                    'e' => state.input.move_end(),
                    'w' => state.input.delete_word_back(),
                    'u' => state.input.clear(),
                    _ => {}
                }
            } else {
                state.input.insert_char(c);
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => state.move_cursor_down(),
        KeyCode::Enter | KeyCode::Char(' ') => state.toggle_at_cursor(),
        KeyCode::Char('e') => state.begin_edit(),
        KeyCode::Char('d') | KeyCode::Delete => state.delete_at_cursor(),
        KeyCode::Esc => state.cancel_edit(),
        KeyCode::Char('q') => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}
