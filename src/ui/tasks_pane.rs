use crate::app::App;
use crate::domain::{task_progress, UiMode};
use crate::ui::styles::{
    active_border_style, border_style, cursor_style, default_style, done_style, label_style,
    selected_style, title_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the add-task field and the task list
pub fn render_tasks_pane(f: &mut Frame, app: &App, area: Rect) {
    let tasks = &app.store.state().tasks;
    let (done, total) = task_progress(tasks);
    let adding = app.ui_mode == UiMode::AddingTask;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if adding { active_border_style() } else { border_style() })
        .title(Span::styled(format!(" Tasks {}/{} ", done, total), title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let input = if adding {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(app.task_input.as_str(), default_style()),
            Span::styled("█", cursor_style()),
        ])
    } else {
        Line::from(Span::styled("+ Add a task...", label_style()))
    };
    f.render_widget(Paragraph::new(input), rows[0]);

    if tasks.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No tasks yet", label_style())),
            rows[1],
        );
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(index, task)| {
            let checkbox = if task.done { "[x] " } else { "[ ] " };
            let text_style = if task.done { done_style() } else { default_style() };
            let line = Line::from(vec![
                Span::raw(checkbox),
                Span::styled(task.text.as_str(), text_style),
            ]);

            let item = ListItem::new(line);
            if index == app.selected_index && app.ui_mode == UiMode::Normal {
                item.style(selected_style())
            } else {
                item
            }
        })
        .collect();

    f.render_widget(List::new(items), rows[1]);
}
