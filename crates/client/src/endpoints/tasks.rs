//! Checklist task endpoints.

use mywedding_core::task::{CreateTask, Task, TaskStatus, UpdateTaskStatus};

use crate::api::{ApiClient, Call};
use crate::error::ApiError;

impl ApiClient {
    pub async fn get_tasks(&self, token: &str, event_id: &str) -> Result<Vec<Task>, ApiError> {
        self.fetch(
            Call::get(
                format!("/api/events/{event_id}/tasks"),
                "Failed to fetch tasks.",
            )
            .bearer(token),
        )
        .await
    }

    pub async fn create_task(
        &self,
        token: &str,
        event_id: &str,
        task: &CreateTask,
    ) -> Result<Task, ApiError> {
        self.fetch(
            Call::post(
                format!("/api/events/{event_id}/tasks"),
                "Failed to create task.",
            )
            .bearer(token)
            .json(task)?,
        )
        .await
    }

    pub async fn update_task_status(
        &self,
        token: &str,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<serde_json::Value, ApiError> {
        self.fetch_value(
            Call::put(
                format!("/api/tasks/{task_id}/status"),
                "Failed to update task status.",
            )
            .bearer(token)
            .json(&UpdateTaskStatus { status })?,
        )
        .await
    }
}
