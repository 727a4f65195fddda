//! Fixed-width table rendering for task listings.

use crate::task::domain::Task;
use std::borrow::Cow;
use std::io::{self, Write};

/// Widest description the table renders before truncating.
const MAX_DESCRIPTION_WIDTH: usize = 50;

/// Characters kept from an over-long description before the ellipsis.
const TRUNCATED_WIDTH: usize = 47;

/// Returns the description as shown in the table.
///
/// Descriptions longer than fifty characters are cut to forty-seven and
/// finished with `...`. Counting is per character, so multi-byte text is
/// never split mid-codepoint.
pub(crate) fn display_description(description: &str) -> Cow<'_, str> {
    if description.chars().count() <= MAX_DESCRIPTION_WIDTH {
        return Cow::Borrowed(description);
    }
    let mut shortened: String = description.chars().take(TRUNCATED_WIDTH).collect();
    shortened.push_str("...");
    Cow::Owned(shortened)
}

/// Writes the task table: id, description, and status columns with a
/// header and rule line.
///
/// # Errors
///
/// Returns any I/O error raised while writing to `out`.
pub fn render_task_table(out: &mut impl Write, tasks: &[Task]) -> io::Result<()> {
    writeln!(out, "\n{:<5} | {:<50} | {:<15}", "ID", "Description", "Status")?;
    writeln!(out, "{}", "-".repeat(75))?;
    for task in tasks {
        writeln!(
            out,
            "{:<5} | {:<50} | {:<15}",
            task.id().value(),
            display_description(task.description().as_str()),
            task.status_display(),
        )?;
    }
    Ok(())
}
