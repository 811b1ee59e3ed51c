mod input_box;
mod layout;
mod status_bar;
mod theme;
mod todo_list;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let styles = theme::Styles(state.theme());
    frame.render_widget(Block::default().style(styles.base()), area);

    let app_layout = layout::compute_layout(area);
    input_box::render(frame, app_layout.input_box, state);
    todo_list::render(frame, app_layout.todo_list, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
