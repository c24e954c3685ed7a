use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Border of the field currently taking text input
pub fn active_border_style() -> Style {
    Style::default().fg(Color::LightCyan)
}

/// Small grey captions ("Time spent today", "Last 7 days")
pub fn label_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Big number for today's time
pub fn time_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// "Start Focus" button
pub fn start_button_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// "Stop Focus" button
pub fn stop_button_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Today's bar
pub fn today_bar_style() -> Style {
    Style::default().fg(Color::Indexed(62))
}

/// Bars for earlier days
pub fn past_bar_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Done/completed task style
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Text input cursor
pub fn cursor_style() -> Style {
    Style::default()
        .fg(Color::LightCyan)
        .add_modifier(Modifier::SLOW_BLINK)
}
