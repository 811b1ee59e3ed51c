use crate::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::BorderType;

/// Widget styles derived from the active palette.
#[derive(Debug, Clone, Copy)]
pub struct Styles(pub Theme);

impl Styles {
    pub fn base(&self) -> Style {
        Style::default().fg(self.0.text).bg(self.0.background)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.0.icon)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.0.tint)
    }

    pub fn border_type(&self) -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused(&self) -> BorderType {
        BorderType::Rounded
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.0.text).add_modifier(Modifier::BOLD)
    }

    pub fn input_text(&self) -> Style {
        Style::default().fg(self.0.text)
    }

    pub fn placeholder(&self) -> Style {
        Style::default().fg(self.0.placeholder)
    }

    /// Add / Update / Cancel hints: inverted like the mobile buttons.
    pub fn button(&self) -> Style {
        Style::default()
            .fg(self.0.background)
            .bg(self.0.todo_button_background)
    }

    pub fn todo_text(&self) -> Style {
        Style::default().fg(self.0.text)
    }

    pub fn todo_done(&self) -> Style {
        Style::default()
            .fg(self.0.icon)
            .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM)
    }

    pub fn todo_selected(&self) -> Style {
        Style::default().bg(self.0.selected_todo_background)
    }

    pub fn cursor_row(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    pub fn delete_icon(&self) -> Style {
        Style::default()
            .fg(self.0.background)
            .bg(self.0.delete_icon_background)
    }

    pub fn separator(&self) -> Style {
        Style::default().fg(self.0.text)
    }

    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.0.text).bg(self.0.header_background)
    }

    pub fn status_accent(&self) -> Style {
        Style::default()
            .fg(self.0.tint)
            .bg(self.0.header_background)
            .add_modifier(Modifier::BOLD)
    }
}
