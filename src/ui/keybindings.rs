use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, ui_mode: UiMode, area: Rect) {
    let hints = match ui_mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" f focus  "),
            Span::raw("r reset  "),
            Span::raw("g goal  "),
            Span::raw("a add  "),
            Span::raw("x done  "),
            Span::raw("d del  "),
            Span::raw("q quit"),
        ]),
        UiMode::EditingGoal => Line::raw(" Type to edit goal  ·  Enter/Esc done"),
        UiMode::AddingTask => Line::raw(" Enter add  ·  Esc cancel"),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
