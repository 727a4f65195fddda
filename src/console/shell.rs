//! Interactive console loop dispatching menu choices to the task service.

use crate::console::menu::{MENU_TEXT, MenuChoice};
use crate::console::render::render_task_table;
use crate::task::{
    domain::TaskId,
    ports::TaskRepository,
    services::TaskService,
};
use mockable::Clock;
use std::io::{self, BufRead, Write};

/// Menu-driven console session over a task service.
///
/// Generic over its input and output streams so whole sessions can be
/// scripted in tests. The shell never touches task storage directly; every
/// operation goes through the service.
pub struct ConsoleShell<R, C, I, W>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    I: BufRead,
    W: Write,
{
    service: TaskService<R, C>,
    input: I,
    output: W,
}

impl<R, C, I, W> ConsoleShell<R, C, I, W>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    I: BufRead,
    W: Write,
{
    /// Creates a shell over the given service and streams.
    #[must_use]
    pub const fn new(service: TaskService<R, C>, input: I, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the input or output streams. Core
    /// errors (validation, not-found) are reported to the user and never
    /// terminate the loop.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{MENU_TEXT}")?;
            let Some(choice_text) = self.prompt("Enter choice: ")? else {
                break;
            };
            match MenuChoice::parse(&choice_text) {
                Some(MenuChoice::AddTask) => self.handle_add().await?,
                Some(MenuChoice::ViewTasks) => self.handle_view().await?,
                Some(MenuChoice::UpdateTask) => self.handle_update().await?,
                Some(MenuChoice::DeleteTask) => self.handle_delete().await?,
                Some(MenuChoice::MarkComplete) => self.handle_toggle("complete").await?,
                Some(MenuChoice::MarkIncomplete) => self.handle_toggle("incomplete").await?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                None => writeln!(self.output, "Invalid choice. Please enter 1-7")?,
            }
        }
        Ok(())
    }

    /// Writes a prompt and reads one trimmed line.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Prompts for a task identifier.
    ///
    /// Parse failures are a front-end concern and are reported here,
    /// before the core is called; an out-of-range id is reported as a
    /// validation error. Returns `None` whenever the handler should abort
    /// back to the menu.
    fn prompt_task_id(&mut self) -> io::Result<Option<TaskId>> {
        let Some(text) = self.prompt("Enter task ID: ")? else {
            return Ok(None);
        };
        let Ok(value) = text.parse::<u64>() else {
            writeln!(self.output, "Please enter a valid number")?;
            return Ok(None);
        };
        match TaskId::new(value) {
            Ok(id) => Ok(Some(id)),
            Err(err) => {
                writeln!(self.output, "Error: {err}")?;
                Ok(None)
            }
        }
    }

    /// Reports `No tasks available` and returns `true` when the store is
    /// empty or unreadable.
    async fn report_empty_store(&mut self) -> io::Result<bool> {
        match self.service.list_all().await {
            Ok(tasks) if tasks.is_empty() => {
                writeln!(self.output, "No tasks available")?;
                Ok(true)
            }
            Ok(_) => Ok(false),
            Err(err) => {
                writeln!(self.output, "Error: {err}")?;
                Ok(true)
            }
        }
    }

    async fn handle_add(&mut self) -> io::Result<()> {
        let Some(description) = self.prompt("Enter task description: ")? else {
            return Ok(());
        };
        match self.service.add(description).await {
            Ok(task) => writeln!(self.output, "Task added with ID {}", task.id()),
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }

    async fn handle_view(&mut self) -> io::Result<()> {
        match self.service.list_all().await {
            Ok(tasks) if tasks.is_empty() => writeln!(self.output, "No tasks found"),
            Ok(tasks) => render_task_table(&mut self.output, &tasks),
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }

    async fn handle_update(&mut self) -> io::Result<()> {
        if self.report_empty_store().await? {
            return Ok(());
        }
        let Some(id) = self.prompt_task_id()? else {
            return Ok(());
        };
        let Some(new_description) = self.prompt("Enter new description: ")? else {
            return Ok(());
        };
        match self.service.update(id, new_description).await {
            Ok(_) => writeln!(self.output, "Task {id} updated successfully"),
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }

    async fn handle_delete(&mut self) -> io::Result<()> {
        if self.report_empty_store().await? {
            return Ok(());
        }
        let Some(id) = self.prompt_task_id()? else {
            return Ok(());
        };
        match self.service.delete(id).await {
            Ok(()) => writeln!(self.output, "Task {id} deleted successfully"),
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }

    /// Handles both mark-complete and mark-incomplete menu entries.
    ///
    /// Both flip the completion flag through `toggle_complete`; `outcome`
    /// names the state the user asked for in the confirmation message.
    async fn handle_toggle(&mut self, outcome: &str) -> io::Result<()> {
        if self.report_empty_store().await? {
            return Ok(());
        }
        let Some(id) = self.prompt_task_id()? else {
            return Ok(());
        };
        match self.service.toggle_complete(id).await {
            Ok(_) => writeln!(self.output, "Task {id} marked as {outcome}"),
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }
}
