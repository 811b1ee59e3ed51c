use crate::config::AppConfig;
use crate::theme::{Appearance, Mode, Theme};
use crate::todo::item::title_len;
use crate::todo::{TodoId, TodoItem, TodoSnapshot, TodoStore, MAX_TITLE_LEN};
use std::cell::Cell;
use std::rc::Rc;
use unicode_width::UnicodeWidthStr;

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    /// Insert at the cursor unless the title is already at its length limit.
    pub fn insert_char(&mut self, c: char) {
        if title_len(&self.text) >= MAX_TITLE_LEN {
            return;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Display column of the cursor, accounting for wide characters.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Input,
    List,
}

pub struct AppState {
    pub config: AppConfig,
    pub todos: TodoStore,
    pub input: InputState,
    pub focus: FocusPanel,
    /// Highlighted row in the ordered list.
    pub cursor: usize,
    pub appearance: Appearance,
    pub theme: Rc<Cell<Theme>>,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig, snapshot: TodoSnapshot, mode: Mode) -> Self {
        let mut appearance = Appearance::new(mode);
        let theme = Rc::new(Cell::new(appearance.theme()));
        let palette = Rc::clone(&theme);
        appearance.subscribe(move |t| palette.set(*t));
        Self {
            config,
            todos: TodoStore::new(snapshot),
            input: InputState::new(),
            focus: FocusPanel::Input,
            cursor: 0,
            appearance,
            theme,
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.appearance.set_mode(mode) {
            self.dirty = true;
        }
    }

    pub fn is_editing(&self) -> bool {
        self.todos.selection().is_some()
    }

    /// The item under the list cursor.
    pub fn cursor_item(&self) -> Option<TodoItem> {
        self.todos.list_ordered().iter().nth(self.cursor).cloned()
    }

    fn cursor_id(&self) -> Option<TodoId> {
        self.cursor_item().map(|t| t.id)
    }

    fn clamp_cursor(&mut self) {
        let len = self.todos.current().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.dirty = true;
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.todos.current().len() {
            self.cursor += 1;
        }
        self.dirty = true;
    }

    /// Enter in the input box: update the selected item, or add a new one.
    pub fn submit_input(&mut self) {
        let strict = self.config.behavior.strict_titles;
        let editing = self.is_editing();
        let title = self.input.text.clone();

        if strict {
            let result = if editing {
                self.todos.try_update(&title)
            } else {
                self.todos.try_add(&title)
            };
            match result {
                Ok(item) => {
                    self.status_message = None;
                    self.after_submit(editing, item.id);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "rejected title");
                    self.status_message = Some(e.to_string());
                    self.dirty = true;
                }
            }
        } else if editing {
            let id = self.todos.selection();
            self.todos.update(&title);
            if let Some(id) = id {
                self.after_submit(true, id);
            }
        } else {
            let item = self.todos.add(&title);
            self.after_submit(false, item.id);
        }
    }

    fn after_submit(&mut self, edited: bool, id: TodoId) {
        self.input.clear();
        if !edited {
            // New items sort first.
            self.cursor = 0;
        } else if let Some(pos) = self.todos.list_ordered().iter().position(|t| t.id == id) {
            self.cursor = pos;
        }
        self.dirty = true;
    }

    /// Select the item under the cursor and load its title into the input.
    pub fn begin_edit(&mut self) {
        let Some(item) = self.cursor_item() else {
            return;
        };
        self.todos.select_for_edit(item.id);
        self.input.set_text(&item.title);
        self.focus = FocusPanel::Input;
        self.status_message = None;
        self.dirty = true;
    }

    pub fn cancel_edit(&mut self) {
        self.todos.cancel_edit();
        self.input.clear();
        self.status_message = None;
        self.dirty = true;
    }

    pub fn toggle_at_cursor(&mut self) {
        if let Some(id) = self.cursor_id() {
            self.todos.toggle_completed(id);
            self.dirty = true;
        }
    }

    pub fn delete_at_cursor(&mut self) {
        let Some(id) = self.cursor_id() else {
            return;
        };
        let was_editing = self.is_editing();
        self.todos.delete(id);
        if was_editing && !self.is_editing() {
            self.input.clear();
        }
        self.clamp_cursor();
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Input => FocusPanel::List,
            FocusPanel::List => FocusPanel::Input,
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let snapshot = self.todos.current();
        let mut s = format!(
            "Todos: {} | Remaining: {}",
            snapshot.len(),
            snapshot.remaining()
        );
        if let Some(id) = snapshot.selection() {
            s.push_str(&format!(" | Editing #{}", id));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::seed::snapshot_from_seed;

    fn state_with(titles: &[&str]) -> AppState {
        let items = titles
            .iter()
            .enumerate()
            .map(|(i, t)| TodoItem::new(i as u64 + 1, *t))
            .collect();
        AppState::new(
            AppConfig::default(),
            snapshot_from_seed(items).unwrap(),
            Mode::Light,
        )
    }

    #[test]
    fn test_input_respects_title_limit() {
        let mut input = InputState::new();
        for _ in 0..MAX_TITLE_LEN + 10 {
            input.insert_char('é');
        }
        assert_eq!(title_len(&input.text), MAX_TITLE_LEN);
        assert_eq!(input.cursor, input.text.len());
    }

    #[test]
    fn test_input_editing() {
        let mut input = InputState::new();
        for c in "buy milk".chars() {
            input.insert_char(c);
        }
        input.delete_word_back();
        assert_eq!(input.text, "buy ");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "uy ");
        input.move_end();
        input.delete_back();
        assert_eq!(input.text, "uy");
        input.clear();
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_cursor_column_counts_wide_chars() {
        let mut input = InputState::new();
        input.set_text("日本");
        assert_eq!(input.cursor_column(), 4);
        input.move_left();
        assert_eq!(input.cursor_column(), 2);
    }

    #[test]
    fn test_submit_adds_then_updates() {
        let mut state = state_with(&["A"]);
        state.input.set_text("B");
        state.submit_input();
        assert_eq!(state.cursor_item().unwrap().title, "B");
        assert!(state.input.text.is_empty());

        state.move_cursor_down();
        state.begin_edit();
        assert_eq!(state.input.text, "A");
        assert!(state.is_editing());

        state.input.set_text("A2");
        state.submit_input();
        assert!(!state.is_editing());
        assert_eq!(state.todos.current().get(1).unwrap().title, "A2");
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_strict_mode_reports_errors() {
        let mut state = state_with(&["A"]);
        state.config.behavior.strict_titles = true;
        state.input.set_text("  ");
        state.submit_input();
        assert_eq!(state.todos.current().len(), 1);
        assert_eq!(state.status_line(), "title is empty");
        assert_eq!(state.input.text, "  ");

        state.input.set_text("ok");
        state.submit_input();
        assert_eq!(state.todos.current().len(), 2);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_delete_selected_clears_input() {
        let mut state = state_with(&["A", "B"]);
        state.begin_edit();
        assert_eq!(state.todos.selection(), Some(2));
        state.delete_at_cursor();
        assert!(!state.is_editing());
        assert!(state.input.text.is_empty());
        assert_eq!(state.cursor_item().unwrap().id, 1);
    }

    #[test]
    fn test_cursor_clamps_after_delete() {
        let mut state = state_with(&["A", "B"]);
        state.move_cursor_down();
        state.move_cursor_down();
        assert_eq!(state.cursor, 1);
        state.delete_at_cursor();
        assert_eq!(state.cursor, 0);
        state.delete_at_cursor();
        assert_eq!(state.cursor, 0);
        assert!(state.cursor_item().is_none());
        state.toggle_at_cursor();
        state.begin_edit();
        assert!(!state.is_editing());
    }

    #[test]
    fn test_mode_change_updates_palette() {
        let mut state = state_with(&[]);
        state.dirty = false;
        state.set_mode(Mode::Dark);
        assert_eq!(state.theme().mode, Mode::Dark);
        assert!(state.dirty);
    }

    #[test]
    fn test_status_line() {
        let mut state = state_with(&["A", "B"]);
        state.toggle_at_cursor();
        assert_eq!(state.status_line(), "Todos: 2 | Remaining: 1");
        state.begin_edit();
        assert_eq!(state.status_line(), "Todos: 2 | Remaining: 1 | Editing #2");
    }
}
