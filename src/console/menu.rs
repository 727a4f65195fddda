//! Menu choices offered by the console front end.

/// One of the seven menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Create a new task.
    AddTask,
    /// List all tasks in a table.
    ViewTasks,
    /// Replace a task's description.
    UpdateTask,
    /// Delete a task.
    DeleteTask,
    /// Mark a task complete.
    MarkComplete,
    /// Mark a task incomplete.
    MarkIncomplete,
    /// Leave the program.
    Exit,
}

impl MenuChoice {
    /// Parses the raw choice text entered at the menu prompt.
    ///
    /// Returns `None` for anything other than the digits `1` through `7`;
    /// unrecognized input is reported to the user without touching core
    /// state.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddTask),
            "2" => Some(Self::ViewTasks),
            "3" => Some(Self::UpdateTask),
            "4" => Some(Self::DeleteTask),
            "5" => Some(Self::MarkComplete),
            "6" => Some(Self::MarkIncomplete),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The menu text shown before each prompt.
pub(crate) const MENU_TEXT: &str = "\n=== Todo List Manager ===\n\
1. Add Task\n\
2. View Tasks\n\
3. Update Task\n\
4. Delete Task\n\
5. Mark Task Complete\n\
6. Mark Task Incomplete\n\
7. Exit\n\n";
