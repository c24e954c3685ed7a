use super::window::reconcile;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Goal shown on a fresh install
pub const DEFAULT_GOAL: &str = "Finish weekly report";

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Millisecond timestamp of creation, bumped to stay strictly increasing
    pub id: i64,
    /// Trimmed, never empty
    pub text: String,
    pub done: bool,
}

impl Task {
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }
}

/// Focus seconds accumulated on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Local calendar date as "YYYY-MM-DD"
    pub date: String,
    pub seconds: u64,
}

/// Everything the popup persists between sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub goal: String,
    pub tasks: Vec<Task>,
    /// Oldest to newest; reconciliation restores it when missing
    #[serde(default)]
    pub activity: Vec<DayRecord>,
    #[serde(default)]
    pub focus_mode: bool,
}

impl AppState {
    /// State for a first launch (or after an unreadable snapshot)
    pub fn default_for(today: NaiveDate) -> Self {
        Self {
            goal: DEFAULT_GOAL.to_string(),
            tasks: vec![
                Task::new(1, "Quick inbox triage"),
                Task::new(2, "Standup notes"),
            ],
            activity: reconcile(&[], today),
            focus_mode: false,
        }
    }

    /// Day record for the given date key, if it is inside the window
    pub fn day(&self, date_key: &str) -> Option<&DayRecord> {
        self.activity.iter().find(|d| d.date == date_key)
    }

    pub fn day_mut(&mut self, date_key: &str) -> Option<&mut DayRecord> {
        self.activity.iter_mut().find(|d| d.date == date_key)
    }

    /// Highest task id in use, 0 when the list is empty
    pub fn max_task_id(&self) -> i64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0)
    }
}
