use crate::domain::UiMode;
use crate::store::Store;
use crate::ticker::FocusTimer;
use std::time::Instant;

/// Main application state: the store plus everything only the popup cares about
pub struct App {
    pub store: Store,
    pub timer: FocusTimer,
    pub ui_mode: UiMode,
    /// Text typed into the "Add a task..." field
    pub task_input: String,
    pub selected_index: usize,
}

impl App {
    pub fn new(store: Store, now: Instant) -> Self {
        let mut app = Self {
            store,
            timer: FocusTimer::new(),
            ui_mode: UiMode::Normal,
            task_input: String::new(),
            selected_index: 0,
        };
        // Focus mode may have been left on in the last session
        app.sync_timer(now);
        app
    }

    fn sync_timer(&mut self, now: Instant) {
        self.timer.sync(self.store.state().focus_mode, now);
    }

    /// Start/stop focus button
    pub fn toggle_focus(&mut self, now: Instant) {
        self.tick(now);
        self.store.toggle_focus_mode();
        self.sync_timer(now);
    }

    pub fn set_focus(&mut self, on: bool, now: Instant) {
        // Seconds already due belong to the session being stopped
        self.tick(now);
        self.store.set_focus_mode(on);
        self.sync_timer(now);
    }

    /// Apply every focus second that elapsed up to `now`
    pub fn tick(&mut self, now: Instant) {
        self.sync_timer(now);
        let due = self.timer.due_ticks(now);
        self.store.add_focus_seconds(u64::from(due));
    }

    /// Teardown: no tick may outlive the session
    pub fn shutdown(&mut self, now: Instant) {
        self.tick(now);
        self.timer.stop();
        self.store.save();
    }

    pub fn reset_today(&mut self) {
        self.store.reset_today();
    }

    /// Id of the highlighted task, if any
    pub fn selected_task_id(&self) -> Option<i64> {
        self.store
            .state()
            .tasks
            .get(self.selected_index)
            .map(|t| t.id)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.store.state().tasks.len() {
            self.selected_index += 1;
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.store.toggle_task(id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.store.delete_task(id);
            self.clamp_selection();
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.store.state().tasks.len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Goal editing: every keystroke is written through immediately
    pub fn start_edit_goal(&mut self) {
        self.ui_mode = UiMode::EditingGoal;
    }

    pub fn goal_add_char(&mut self, c: char) {
        let mut goal = self.store.state().goal.clone();
        goal.push(c);
        self.store.set_goal(goal);
    }

    pub fn goal_backspace(&mut self) {
        let mut goal = self.store.state().goal.clone();
        if goal.pop().is_some() {
            self.store.set_goal(goal);
        }
    }

    pub fn finish_edit_goal(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Focus the "Add a task..." field
    pub fn start_add_task(&mut self) {
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn task_input_add_char(&mut self, c: char) {
        self.task_input.push(c);
    }

    pub fn task_input_backspace(&mut self) {
        self.task_input.pop();
    }

    /// Enter / Add button. The field is cleared only when a task was added.
    pub fn submit_task_input(&mut self) {
        if self.store.add_task(&self.task_input).is_some() {
            self.task_input.clear();
            self.selected_index = self.store.state().tasks.len() - 1;
        }
    }

    pub fn cancel_task_input(&mut self) {
        self.task_input.clear();
        self.ui_mode = UiMode::Normal;
    }
}
