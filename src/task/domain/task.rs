//! Task aggregate root and completion lifecycle types.

use super::{Description, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task completion state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    /// Work on the task has not been finished.
    #[default]
    Incomplete,
    /// The task has been finished.
    Complete,
}

impl CompletionStatus {
    /// Returns the human-readable display form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incomplete => "Incomplete",
            Self::Complete => "Complete",
        }
    }

    /// Returns the opposite state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Incomplete => Self::Complete,
            Self::Complete => Self::Incomplete,
        }
    }
}

/// Task aggregate root.
///
/// Fields are private; callers receive owned snapshots from the repository
/// and mutate only through the service operations, so every state change
/// passes validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: Description,
    status: CompletionStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new incomplete task.
    ///
    /// Invalid identifiers and empty descriptions are unrepresentable here:
    /// both arguments have already been validated by their constructors.
    #[must_use]
    pub fn new(id: TaskId, description: Description, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            description,
            status: CompletionStatus::Incomplete,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the completion state.
    #[must_use]
    pub const fn status(&self) -> CompletionStatus {
        self.status
    }

    /// Returns `true` when the task is complete.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.status, CompletionStatus::Complete)
    }

    /// Returns the human-readable status string.
    #[must_use]
    pub const fn status_display(&self) -> &'static str {
        self.status.as_str()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest mutation.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the description with an already-validated value.
    ///
    /// Identifier and completion state are untouched.
    pub fn rename(&mut self, description: Description, clock: &impl Clock) {
        self.description = description;
        self.touch(clock);
    }

    /// Marks the task complete.
    pub fn mark_complete(&mut self, clock: &impl Clock) {
        self.status = CompletionStatus::Complete;
        self.touch(clock);
    }

    /// Marks the task incomplete.
    pub fn mark_incomplete(&mut self, clock: &impl Clock) {
        self.status = CompletionStatus::Incomplete;
        self.touch(clock);
    }

    /// Flips the completion state.
    ///
    /// Two consecutive calls restore the original state.
    pub fn toggle_status(&mut self, clock: &impl Clock) {
        self.status = self.status.toggled();
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
