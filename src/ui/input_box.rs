use crate::app::state::*;
use crate::todo::MAX_TITLE_LEN;
use crate::ui::theme::Styles;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let styles = Styles(state.theme());
    let focused = state.focus == FocusPanel::Input;
    let (border_style, border_type) = if focused {
        (styles.border_focused(), styles.border_type_focused())
    } else {
        (styles.border(), styles.border_type())
    };

    // Buttons become key hints on the title line.
    let hints = if state.is_editing() {
        vec![
            Span::styled(" Enter: Update ", styles.button()),
            Span::raw(" "),
            Span::styled(" Esc: Cancel ", styles.button()),
        ]
    } else {
        vec![Span::styled(" Enter: Add ", styles.button())]
    };

    let title = format!(" Todo ({}/{}) ", state.input.text.chars().count(), MAX_TITLE_LEN);
    let block = Block::default()
        .title(Span::styled(
            title,
            if focused { styles.title() } else { styles.border() },
        ))
        .title_top(Line::from(hints).right_aligned())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
        .style(styles.base());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.input.text.is_empty() {
        let placeholder = Paragraph::new("Add a new todo").style(styles.placeholder());
        frame.render_widget(placeholder, inner);
    } else {
        // Long titles scroll so the cursor stays visible.
        let column = state.input.cursor_column() as u16;
        let offset = column.saturating_sub(inner.width.saturating_sub(1));
        let paragraph = Paragraph::new(state.input.text.as_str())
            .style(styles.input_text())
            .scroll((0, offset));
        frame.render_widget(paragraph, inner);
    }

    if focused && inner.width > 0 {
        let column = state.input.cursor_column() as u16;
        let cursor_x = inner.x + column.min(inner.width - 1);
        frame.set_cursor_position((cursor_x, inner.y));
    }
}
