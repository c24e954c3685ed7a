use crate::app::App;
use crate::domain::format_seconds;
use crate::ui::styles::{
    border_style, hint_style, label_style, start_button_style, stop_button_style, time_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render time spent today next to the start/stop and reset buttons
pub fn render_focus_pane(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(inner);

    let time = vec![
        Line::from(Span::styled("Time spent today", label_style())),
        Line::from(Span::styled(
            format_seconds(app.store.today_seconds()),
            time_style(),
        )),
    ];
    f.render_widget(Paragraph::new(time), columns[0]);

    let focus_button = if app.timer.is_running() {
        Span::styled(" ■ Stop Focus ", stop_button_style())
    } else {
        Span::styled(" ▶ Start Focus ", start_button_style())
    };
    let buttons = vec![
        Line::from(focus_button),
        Line::from(Span::styled("[r] Reset Today", hint_style())),
    ];
    f.render_widget(
        Paragraph::new(buttons).alignment(Alignment::Right),
        columns[1],
    );
}
