pub mod clock;
pub mod enums;
pub mod state;
pub mod views;
pub mod window;

pub use clock::{Clock, SystemClock};
pub use enums::UiMode;
pub use state::{AppState, DayRecord, Task};
pub use views::{
    bar_eighths, bar_glyph, build_view, day_label, format_seconds, task_progress, PopupView,
};
pub use window::{date_key, is_current, reconcile};
