use crate::app::state::*;
use crate::ui::theme::Styles;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let styles = Styles(state.theme());
    let focused = state.focus == FocusPanel::List;
    let (border_style, border_type) = if focused {
        (styles.border_focused(), styles.border_type_focused())
    } else {
        (styles.border(), styles.border_type())
    };

    let snapshot = state.todos.snapshot();
    let block = Block::default()
        .title(format!(
            " Todos ({}/{}) ",
            snapshot.remaining(),
            snapshot.len()
        ))
        .title_style(if focused { styles.title() } else { styles.border() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(styles.base());

    if snapshot.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let empty = Paragraph::new(" Nothing to do").style(styles.placeholder());
        frame.render_widget(empty, inner);
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let selection = snapshot.selection();
    let show_separators = state.config.ui.show_separators;
    let mut items: Vec<ListItem> = Vec::new();
    let mut cursor_index = None;

    for (i, todo) in snapshot.list_ordered().iter().enumerate() {
        if show_separators && i > 0 {
            items.push(ListItem::new(Span::styled(
                "─".repeat(width),
                styles.separator(),
            )));
        }
        if i == state.cursor {
            cursor_index = Some(items.len());
        }

        let (check, text_style) = if todo.completed {
            (" ✓ ", styles.todo_done())
        } else {
            (" ○ ", styles.todo_text())
        };
        let mut row = ListItem::new(Line::from(vec![
            Span::styled(check, styles.todo_text()),
            Span::styled(todo.title.clone(), text_style),
            Span::raw(" "),
            Span::styled(" ✕ ", styles.delete_icon()),
        ]));
        if selection == Some(todo.id) {
            row = row.style(styles.todo_selected());
        }
        items.push(row);
    }

    let highlight = if focused {
        styles.cursor_row()
    } else {
        Style::default()
    };
    let list = List::new(items).block(block).highlight_style(highlight);
    let mut list_state = ListState::default().with_selected(cursor_index);
    frame.render_stateful_widget(list, area, &mut list_state);
}
