use super::state::{AppState, DayRecord, Task};
use super::window::date_key;
use chrono::NaiveDate;

/// The chart never scales below one minute, so near-empty days stay visible
pub const MIN_CHART_SCALE_SECS: u64 = 60;

/// Eighth-block glyphs, index = filled eighths of a cell
const BAR_GLYPHS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Read-only data the popup renders from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupView<'a> {
    pub goal: &'a str,
    pub tasks: &'a [Task],
    pub activity: &'a [DayRecord],
    pub focus_mode: bool,
    pub today_key: String,
    pub today_seconds: u64,
    pub max_seconds: u64,
}

/// Derive the view for `today` from the current state
pub fn build_view(state: &AppState, today: NaiveDate) -> PopupView<'_> {
    let today_key = date_key(today);
    let today_seconds = state.day(&today_key).map(|d| d.seconds).unwrap_or(0);

    PopupView {
        goal: &state.goal,
        tasks: &state.tasks,
        activity: &state.activity,
        focus_mode: state.focus_mode,
        today_key,
        today_seconds,
        max_seconds: chart_scale(&state.activity),
    }
}

/// Largest daily total, floored at one minute
pub fn chart_scale(activity: &[DayRecord]) -> u64 {
    activity
        .iter()
        .map(|d| d.seconds)
        .max()
        .unwrap_or(0)
        .max(MIN_CHART_SCALE_SECS)
}

/// Format seconds as "1h 2m 3s", "2m 3s" or "3s"
pub fn format_seconds(total: u64) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Bar height in eighths of a row, proportional to `seconds / max_seconds`.
/// Always at least one eighth so empty days still show a stub.
pub fn bar_eighths(seconds: u64, max_seconds: u64, rows: u16) -> u16 {
    let capacity = u32::from(rows) * 8;
    if capacity == 0 {
        return 0;
    }
    let ratio = seconds as f64 / max_seconds.max(1) as f64;
    let eighths = (ratio.min(1.0) * capacity as f64).round() as u32;
    eighths.clamp(1, capacity) as u16
}

/// Glyph for the cell `row` rows above the baseline of a bar `eighths` tall
pub fn bar_glyph(eighths: u16, row: u16) -> char {
    let filled = eighths.saturating_sub(row * 8).min(8);
    BAR_GLYPHS[filled as usize]
}

/// "MM-DD" label for a "YYYY-MM-DD" key
pub fn day_label(date_key: &str) -> &str {
    date_key.get(5..).unwrap_or(date_key)
}

/// Count of finished and total tasks
pub fn task_progress(tasks: &[Task]) -> (usize, usize) {
    (tasks.iter().filter(|t| t.done).count(), tasks.len())
}
