//! Menu-driven console front end over the task service.
//!
//! The front end reads raw text lines, parses numeric identifiers (parse
//! failures are reported before the core is ever called), renders tasks in
//! a fixed-width table, and dispatches a seven-choice menu until the user
//! exits. It holds no task state of its own: every read and write goes
//! through the [`crate::task::services::TaskService`] operations.

mod menu;
mod render;
mod shell;

pub use menu::MenuChoice;
pub use render::render_task_table;
pub use shell::ConsoleShell;

#[cfg(test)]
mod tests;
