use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the popup gets; narrower terminals use their full width
pub const POPUP_WIDTH: u16 = 50;

/// Rows the activity chart's bars may use
pub const CHART_ROWS: u16 = 4;

/// Popup layout structure
pub struct PopupLayout {
    pub keybindings_area: Rect,
    pub goal_area: Rect,
    pub focus_area: Rect,
    pub activity_area: Rect,
    pub tasks_area: Rect,
    pub footer_area: Rect,
}

/// Create the popup layout, top to bottom:
/// keybindings, goal, time + focus button, 7-day chart, tasks, footer
pub fn create_layout(area: Rect) -> PopupLayout {
    let popup = create_popup_area(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Keybindings bar
            Constraint::Length(3),              // Goal
            Constraint::Length(4),              // Time spent + focus button
            Constraint::Length(CHART_ROWS + 3), // Chart + date labels + border
            Constraint::Min(4),                 // Tasks
            Constraint::Length(1),              // Footer
        ])
        .split(popup);

    PopupLayout {
        keybindings_area: chunks[0],
        goal_area: chunks[1],
        focus_area: chunks[2],
        activity_area: chunks[3],
        tasks_area: chunks[4],
        footer_area: chunks[5],
    }
}

/// Horizontally centred column of at most `POPUP_WIDTH` cells
pub fn create_popup_area(area: Rect) -> Rect {
    let width = area.width.min(POPUP_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}
