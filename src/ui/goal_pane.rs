use crate::app::App;
use crate::domain::UiMode;
use crate::ui::styles::{active_border_style, border_style, cursor_style, default_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the "Today's Goal" field
pub fn render_goal_pane(f: &mut Frame, app: &App, area: Rect) {
    let editing = app.ui_mode == UiMode::EditingGoal;

    let mut spans = vec![Span::styled(app.store.state().goal.as_str(), default_style())];
    if editing {
        spans.push(Span::styled("█", cursor_style()));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if editing { active_border_style() } else { border_style() })
        .title(Span::styled(" Today's Goal ", title_style()));

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
