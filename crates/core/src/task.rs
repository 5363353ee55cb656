//! Checklist tasks.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{lenient, Date, EntityId};
use crate::validation::require_non_empty;

/// Status values accepted by `PUT /api/tasks/{id}/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    ToDo,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// The status a checkbox click moves to.
    ///
    /// Completed tasks reopen as `ToDo`; anything else completes.
    pub fn toggled(self) -> Self {
        match self {
            Self::Completed => Self::ToDo,
            Self::ToDo | Self::InProgress => Self::Completed,
        }
    }

    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "ToDo",
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
        }
    }
}

/// A task row from `GET /api/events/{id}/tasks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "lenient::optional_date")]
    pub due_date: Option<Date>,
}

/// DTO for `POST /api/events/{id}/tasks`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Date>,
}

impl CreateTask {
    pub fn from_title(title: &str) -> Result<Self, CoreError> {
        Ok(Self {
            title: require_non_empty(title, "Task title")?,
            description: None,
            due_date: None,
        })
    }
}

/// DTO for `PUT /api/tasks/{id}/status`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTaskStatus {
    pub status: TaskStatus,
}

/// Order tasks for the checklist: open tasks first, completed last.
///
/// The sort is stable, so the server's order is kept within each group.
pub fn sort_for_checklist(tasks: &mut [Task]) {
    tasks.sort_by_key(|t| t.status.is_completed());
}
