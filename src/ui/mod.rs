pub mod activity_pane;
pub mod focus_pane;
pub mod goal_pane;
pub mod keybindings;
pub mod layout;
pub mod styles;
pub mod tasks_pane;

use crate::app::App;
use activity_pane::render_activity_pane;
use focus_pane::render_focus_pane;
use goal_pane::render_goal_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::Paragraph,
    Frame,
};
use styles::hint_style;
use tasks_pane::render_tasks_pane;

/// Main render function - draws the entire popup
pub fn render(f: &mut Frame, app: &App) {
    let layout = create_layout(f.size());

    render_keybindings(f, app.ui_mode, layout.keybindings_area);
    render_goal_pane(f, app, layout.goal_area);
    render_focus_pane(f, app, layout.focus_area);
    render_activity_pane(f, app, layout.activity_area);
    render_tasks_pane(f, app, layout.tasks_area);
    render_footer(f, layout.footer_area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new("Data stored locally · Works offline")
        .style(hint_style())
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
