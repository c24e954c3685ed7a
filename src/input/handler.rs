use crate::app::App;
use crate::domain::UiMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Handle a key press. Returns true when the popup should close.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // Ctrl+C always closes, even while typing
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::EditingGoal => handle_goal_mode(app, key),
        UiMode::AddingTask => handle_task_input_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,

        // Start / stop focus
        KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::Char(' ') => {
            app.toggle_focus(Instant::now());
        }

        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_today(),

        KeyCode::Char('g') | KeyCode::Char('G') => app.start_edit_goal(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_task(),

        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        KeyCode::Enter | KeyCode::Char('x') | KeyCode::Char('X') => app.toggle_selected(),

        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => app.delete_selected(),

        _ => {}
    }
    false
}

/// Typing into the goal field
fn handle_goal_mode(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.finish_edit_goal(),
        KeyCode::Backspace => app.goal_backspace(),
        KeyCode::Char(c) => app.goal_add_char(c),
        _ => {}
    }
    false
}

/// Typing into the "Add a task..." field
fn handle_task_input_mode(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_task_input(),
        KeyCode::Esc => app.cancel_task_input(),
        KeyCode::Backspace => app.task_input_backspace(),
        KeyCode::Char(c) => app.task_input_add_char(c),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::testing::FixedClock;
    use crate::persistence::storage::testing::MemoryStorage;
    use crate::store::Store;
    use chrono::NaiveDate;

    fn create_test_app() -> App {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap());
        let store = Store::open(Box::new(MemoryStorage::new()), Box::new(clock));
        App::new(store, Instant::now())
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app();
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(press(&mut app, KeyCode::Esc));
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn test_focus_toggle_key() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Char('f'));
        assert!(app.store.state().focus_mode);
        assert!(app.timer.is_running());

        press(&mut app, KeyCode::Char(' '));
        assert!(!app.store.state().focus_mode);
        assert!(!app.timer.is_running());
    }

    #[test]
    fn test_add_task_with_enter() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        // 'q' is text here, not quit
        type_text(&mut app, "quick call");
        assert!(!press(&mut app, KeyCode::Enter));

        assert_eq!(app.store.state().tasks.last().unwrap().text, "quick call");
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_edit_goal_keys() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Char('g'));
        for _ in 0.."Finish weekly report".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "Ship v2");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.state().goal, "Ship v2");
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_task_keys() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(app.store.state().tasks[1].done);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.store.state().tasks.len(), 1);
        assert_eq!(app.store.state().tasks[0].text, "Quick inbox triage");
    }
}
