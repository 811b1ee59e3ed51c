use crate::app::state::*;
use crate::ui::theme::Styles;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let styles = Styles(state.theme());
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" [{}] ", state.appearance.mode()),
        styles.status_accent(),
    ));

    let status_style = if state.status_message.is_some() {
        styles.delete_icon()
    } else {
        styles.status_bar()
    };
    parts.push(Span::styled(format!(" {} ", state.status_line()), status_style));

    // Focus indicator
    let focus_name = match state.focus {
        FocusPanel::Input => "INPUT",
        FocusPanel::List => "LIST",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), styles.status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        styles.status_accent(),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
