use crate::app::App;
use crate::domain::{bar_eighths, bar_glyph, day_label, DayRecord};
use crate::ui::layout::CHART_ROWS;
use crate::ui::styles::{border_style, label_style, past_bar_style, title_style, today_bar_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of one day's column ("MM-DD")
const COLUMN_WIDTH: usize = 5;
/// Width of the bar inside a column
const BAR_WIDTH: usize = 3;

/// Render the 7-day bar chart
pub fn render_activity_pane(f: &mut Frame, app: &App, area: Rect) {
    let view = app.store.view();
    let lines = chart_lines(view.activity, view.max_seconds, &view.today_key, CHART_ROWS);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Last 7 days ", title_style()));

    f.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center),
        area,
    );
}

/// Bars (top row first) followed by a row of "MM-DD" labels
pub fn chart_lines(
    activity: &[DayRecord],
    max_seconds: u64,
    today_key: &str,
    rows: u16,
) -> Vec<Line<'static>> {
    let heights: Vec<u16> = activity
        .iter()
        .map(|d| bar_eighths(d.seconds, max_seconds, rows))
        .collect();
    let pad = " ".repeat((COLUMN_WIDTH - BAR_WIDTH) / 2);

    let mut lines = Vec::with_capacity(rows as usize + 1);
    for row in (0..rows).rev() {
        let mut spans = Vec::with_capacity(activity.len() * 2);
        for (i, (day, height)) in activity.iter().zip(&heights).enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if day.date == today_key {
                today_bar_style()
            } else {
                past_bar_style()
            };
            let bar: String = std::iter::repeat(bar_glyph(*height, row))
                .take(BAR_WIDTH)
                .collect();
            spans.push(Span::styled(format!("{pad}{bar}{pad}"), style));
        }
        lines.push(Line::from(spans));
    }

    let labels: Vec<String> = activity
        .iter()
        .map(|d| format!("{:^width$}", day_label(&d.date), width = COLUMN_WIDTH))
        .collect();
    lines.push(Line::from(Span::styled(labels.join(" "), label_style())));

    lines
}
