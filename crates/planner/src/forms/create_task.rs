use mywedding_core::task::{CreateTask, Task};

use crate::context::Scope;
use crate::error::PlannerError;
use crate::form::FormState;

/// Inline "add task" form of the checklist. Always visible, so it never
/// closes; success just clears the title.
#[derive(Debug, Clone, Default)]
pub struct CreateTaskForm {
    pub title: String,
    state: FormState,
}

impl CreateTaskForm {
    pub fn new() -> Self {
        let mut state = FormState::default();
        state.open();
        Self {
            title: String::new(),
            state,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub async fn submit(&mut self, scope: &Scope, event_id: &str) -> Result<Task, PlannerError> {
        let title = &self.title;
        let result = self
            .state
            .submit_with(async {
                let body = CreateTask::from_title(title)?;
                let token = scope.token().await?;
                Ok(scope.api().create_task(&token, event_id, &body).await?)
            })
            .await;
        // Inline form: stay visible after a successful submit.
        self.state.keep_open();
        if result.is_ok() {
            self.title.clear();
        }
        result
    }
}
