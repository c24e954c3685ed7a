use crate::domain::{build_view, date_key, is_current, reconcile, AppState, Clock, PopupView, Task};
use crate::persistence::{load_state, save_state, Storage};

/// Owner of the popup state. Every mutation goes through here and is
/// followed by a full-state write to storage.
pub struct Store {
    state: AppState,
    storage: Box<dyn Storage>,
    clock: Box<dyn Clock>,
    last_task_id: i64,
}

impl Store {
    /// Load the saved state (or the default) and align it with today's window
    pub fn open(storage: Box<dyn Storage>, clock: Box<dyn Clock>) -> Self {
        let state = load_state(storage.as_ref(), clock.today());
        let last_task_id = state.max_task_id();

        let mut store = Self {
            state,
            storage,
            clock,
            last_task_id,
        };
        store.reconcile();
        store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Derived data for rendering
    pub fn view(&self) -> PopupView<'_> {
        build_view(&self.state, self.clock.today())
    }

    /// Today's "YYYY-MM-DD" key
    pub fn today_key(&self) -> String {
        date_key(self.clock.today())
    }

    /// Seconds recorded for today
    pub fn today_seconds(&self) -> u64 {
        self.state
            .day(&self.today_key())
            .map(|d| d.seconds)
            .unwrap_or(0)
    }

    /// Rebuild the 7-day activity window around today and persist it
    pub fn reconcile(&mut self) {
        let today = self.clock.today();
        let activity = reconcile(&self.state.activity, today);
        tracing::debug!(today = %today, "reconciled activity window");
        self.state.activity = activity;
        self.save();
    }

    /// Write the full state to storage. Best effort: returns whether it stuck.
    pub fn save(&mut self) -> bool {
        save_state(self.storage.as_mut(), &self.state)
    }

    pub fn set_goal(&mut self, text: impl Into<String>) {
        self.state.goal = text.into();
        self.save();
    }

    /// Append a task; blank text is ignored. Returns the new task's id.
    pub fn add_task(&mut self, text: &str) -> Option<i64> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let id = self.next_task_id();
        self.state.tasks.push(Task::new(id, trimmed));
        tracing::debug!(id, "added task");
        self.save();
        Some(id)
    }

    /// Flip `done` on the matching task. Unknown ids are ignored.
    pub fn toggle_task(&mut self, id: i64) -> bool {
        let Some(task) = self.state.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.done = !task.done;
        self.save();
        true
    }

    /// Remove the matching task. Unknown ids are ignored.
    pub fn delete_task(&mut self, id: i64) -> bool {
        let Some(index) = self.state.tasks.iter().position(|t| t.id == id) else {
            return false;
        };
        self.state.tasks.remove(index);
        tracing::debug!(id, "deleted task");
        self.save();
        true
    }

    pub fn set_focus_mode(&mut self, on: bool) {
        if self.state.focus_mode != on {
            tracing::info!(focus_mode = on, "focus mode changed");
        }
        self.state.focus_mode = on;
        self.save();
    }

    /// Start/stop focus. Returns the new focus mode.
    pub fn toggle_focus_mode(&mut self) -> bool {
        let on = !self.state.focus_mode;
        self.set_focus_mode(on);
        on
    }

    /// Zero today's focus time. No-op when today is not in the window.
    pub fn reset_today(&mut self) -> bool {
        let key = self.today_key();
        let Some(day) = self.state.day_mut(&key) else {
            return false;
        };
        day.seconds = 0;
        tracing::info!(date = %key, "reset today's focus time");
        self.save();
        true
    }

    /// Add one second of focus time to today
    pub fn tick(&mut self) {
        self.add_focus_seconds(1);
    }

    /// Add `seconds` of focus time to today with a single write.
    ///
    /// If the date rolled over since the window was built, the window is
    /// reconciled first so the time lands on the new day.
    pub fn add_focus_seconds(&mut self, seconds: u64) {
        if seconds == 0 {
            return;
        }

        let today = self.clock.today();
        if !is_current(&self.state.activity, today) {
            tracing::info!(today = %today, "date changed mid-session");
            self.state.activity = reconcile(&self.state.activity, today);
        }

        let key = date_key(today);
        if let Some(day) = self.state.day_mut(&key) {
            day.seconds += seconds;
        }
        self.save();
    }

    /// Timestamp-derived id that never repeats within this store
    fn next_task_id(&mut self) -> i64 {
        let id = self.clock.now_millis().max(self.last_task_id + 1);
        self.last_task_id = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::testing::FixedClock;
    use crate::domain::{format_seconds, DayRecord};
    use crate::persistence::storage::testing::MemoryStorage;
    use crate::persistence::STATE_KEY;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_store() -> (Store, MemoryStorage, FixedClock) {
        let storage = MemoryStorage::new();
        let clock = FixedClock::new(date(2024, 5, 20));
        let store = Store::open(Box::new(storage.clone()), Box::new(clock.clone()));
        (store, storage, clock)
    }

    fn persisted(storage: &MemoryStorage) -> AppState {
        serde_json::from_str(&storage.raw(STATE_KEY).unwrap()).unwrap()
    }

    #[test]
    fn test_open_fresh_persists_default() {
        let (store, storage, _) = create_test_store();

        assert_eq!(store.state(), &AppState::default_for(date(2024, 5, 20)));
        assert_eq!(persisted(&storage), *store.state());
    }

    #[test]
    fn test_open_reconciles_saved_window() {
        let saved = AppState {
            goal: "Old goal".to_string(),
            tasks: vec![Task::new(5, "Carry on")],
            activity: vec![
                DayRecord { date: "2024-05-10".into(), seconds: 900 },
                DayRecord { date: "2024-05-15".into(), seconds: 42 },
            ],
            focus_mode: false,
        };
        let storage = MemoryStorage::with_slot(STATE_KEY, &serde_json::to_string(&saved).unwrap());
        let clock = FixedClock::new(date(2024, 5, 20));

        let store = Store::open(Box::new(storage.clone()), Box::new(clock));

        let activity = &store.state().activity;
        assert_eq!(activity.len(), 7);
        assert_eq!(activity[0].date, "2024-05-14");
        assert_eq!(activity[1], DayRecord { date: "2024-05-15".into(), seconds: 42 });
        assert_eq!(activity.iter().map(|d| d.seconds).sum::<u64>(), 42);
        assert_eq!(store.state().goal, "Old goal");
        // Reconciled window is written back immediately
        assert_eq!(persisted(&storage).activity, *activity);
    }

    #[test]
    fn test_add_task() {
        let (mut store, storage, clock) = create_test_store();
        clock.set_millis(1_716_200_000_000);

        let id = store.add_task("  Buy milk  ").unwrap();

        assert_eq!(id, 1_716_200_000_000);
        assert_eq!(store.state().tasks.len(), 3);
        assert_eq!(store.state().tasks[2], Task { id, text: "Buy milk".into(), done: false });
        assert_eq!(persisted(&storage).tasks.len(), 3);
    }

    #[test]
    fn test_add_blank_task_is_noop() {
        let (mut store, storage, _) = create_test_store();
        let writes = storage.writes();

        assert_eq!(store.add_task(""), None);
        assert_eq!(store.add_task("   "), None);
        assert_eq!(store.add_task("\t\n"), None);

        assert_eq!(store.state().tasks.len(), 2);
        assert_eq!(storage.writes(), writes);
    }

    #[test]
    fn test_task_ids_never_collide() {
        let (mut store, _, clock) = create_test_store();
        clock.set_millis(1_000);

        let first = store.add_task("One").unwrap();
        let second = store.add_task("Two").unwrap();
        clock.set_millis(500); // clock went backwards
        let third = store.add_task("Three").unwrap();

        assert_eq!(first, 1_000);
        assert_eq!(second, 1_001);
        assert_eq!(third, 1_002);
    }

    #[test]
    fn test_toggle_task() {
        let (mut store, storage, _) = create_test_store();

        assert!(store.toggle_task(2));
        assert!(!store.state().tasks[0].done);
        assert!(store.state().tasks[1].done);
        assert!(persisted(&storage).tasks[1].done);

        assert!(store.toggle_task(2));
        assert!(!store.state().tasks[1].done);

        let before = store.state().clone();
        assert!(!store.toggle_task(404));
        assert_eq!(*store.state(), before);
    }

    #[test]
    fn test_delete_task() {
        let (mut store, storage, _) = create_test_store();

        assert!(store.delete_task(1));
        assert_eq!(store.state().tasks, vec![Task::new(2, "Standup notes")]);
        assert_eq!(persisted(&storage).tasks.len(), 1);

        assert!(!store.delete_task(1));
        assert!(!store.delete_task(404));
        assert_eq!(store.state().tasks.len(), 1);
    }

    #[test]
    fn test_set_goal() {
        let (mut store, storage, _) = create_test_store();

        store.set_goal("Write the quarterly plan");
        assert_eq!(store.state().goal, "Write the quarterly plan");
        assert_eq!(persisted(&storage).goal, "Write the quarterly plan");

        store.set_goal("");
        assert_eq!(store.state().goal, "");
    }

    #[test]
    fn test_focus_mode() {
        let (mut store, storage, _) = create_test_store();

        store.set_focus_mode(true);
        assert!(store.state().focus_mode);
        assert!(persisted(&storage).focus_mode);

        store.set_focus_mode(true);
        assert!(store.state().focus_mode);

        store.set_focus_mode(false);
        assert!(!store.state().focus_mode);
        assert!(!persisted(&storage).focus_mode);
    }

    #[test]
    fn test_toggle_focus_mode() {
        let (mut store, storage, _) = create_test_store();

        assert!(store.toggle_focus_mode());
        assert!(persisted(&storage).focus_mode);

        assert!(!store.toggle_focus_mode());
        assert!(!store.state().focus_mode);
        assert!(!persisted(&storage).focus_mode);
    }

    #[test]
    fn test_reset_today_only_touches_today() {
        let (mut store, _, _) = create_test_store();
        for _ in 0..30 {
            store.tick();
        }
        store.state.activity[3].seconds = 77;

        assert!(store.reset_today());

        assert_eq!(store.today_seconds(), 0);
        assert_eq!(store.state().activity[3].seconds, 77);
    }

    #[test]
    fn test_reset_today_outside_window_is_noop() {
        let (mut store, _, clock) = create_test_store();
        store.state.activity[6].seconds = 9;
        clock.advance_days(1);

        assert!(!store.reset_today());
        assert_eq!(store.state().activity[6].seconds, 9);
    }

    #[test]
    fn test_tick_increments_today() {
        let (mut store, storage, _) = create_test_store();

        store.tick();
        store.tick();

        assert_eq!(store.today_seconds(), 2);
        assert_eq!(persisted(&storage).activity[6].seconds, 2);
    }

    #[test]
    fn test_add_focus_seconds_writes_once() {
        let (mut store, storage, _) = create_test_store();
        let writes = storage.writes();

        store.add_focus_seconds(3_600);
        assert_eq!(store.today_seconds(), 3_600);
        assert_eq!(storage.writes(), writes + 1);
        assert_eq!(persisted(&storage).activity[6].seconds, 3_600);

        store.add_focus_seconds(0);
        assert_eq!(storage.writes(), writes + 1);
    }

    #[test]
    fn test_tick_after_midnight_rolls_window() {
        let (mut store, _, clock) = create_test_store();
        store.tick();
        clock.advance_days(1);

        store.tick();

        let activity = &store.state().activity;
        assert_eq!(activity.len(), 7);
        assert_eq!(activity[5], DayRecord { date: "2024-05-20".into(), seconds: 1 });
        assert_eq!(activity[6], DayRecord { date: "2024-05-21".into(), seconds: 1 });
        assert_eq!(activity[0].date, "2024-05-15");
    }

    #[test]
    fn test_save_failure_keeps_memory_state() {
        let (mut store, storage, _) = create_test_store();
        storage.fail_writes(true);

        store.set_goal("Unsaved");
        let id = store.add_task("Still here").unwrap();

        assert_eq!(store.state().goal, "Unsaved");
        assert!(store.state().tasks.iter().any(|t| t.id == id));
        assert_eq!(persisted(&storage).goal, "Finish weekly report");
        assert!(!store.save());
    }

    #[test]
    fn test_round_trip_through_reopen() {
        let (mut store, storage, clock) = create_test_store();
        store.set_goal("Keep me");
        store.add_task("Buy milk");
        store.toggle_task(1);
        store.set_focus_mode(true);
        store.tick();
        let before = store.state().clone();

        let reopened = Store::open(Box::new(storage.clone()), Box::new(clock.clone()));
        assert_eq!(*reopened.state(), before);
    }

    #[test]
    fn test_view() {
        let (mut store, _, _) = create_test_store();
        for _ in 0..90 {
            store.tick();
        }

        let view = store.view();
        assert_eq!(view.today_seconds, 90);
        assert_eq!(view.max_seconds, 90);
        assert_eq!(format_seconds(view.today_seconds), "1m 30s");
    }
}
