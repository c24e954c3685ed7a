/// UI mode for the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Normal,
    EditingGoal,
    AddingTask,
}
