use std::collections::{HashMap, HashSet};

use mywedding_core::task::{sort_for_checklist, Task};
use mywedding_core::types::EntityId;

use crate::context::{PlannerContext, Scope};
use crate::error::PlannerError;
use crate::forms::CreateTaskForm;
use crate::refresh::{RefreshSignal, Resource};
use crate::state::Loadable;

/// Event checklist: tasks (open ones first), the add-task form and
/// per-task completion toggles.
#[derive(Debug)]
pub struct ChecklistSection {
    scope: Scope,
    event_id: EntityId,
    tasks: Loadable<Vec<Task>>,
    create: CreateTaskForm,
    updating: HashSet<EntityId>,
    task_errors: HashMap<EntityId, String>,
}

impl ChecklistSection {
    pub fn new(ctx: &PlannerContext, event_id: impl Into<EntityId>) -> Self {
        Self {
            scope: ctx.scope(),
            event_id: event_id.into(),
            tasks: Loadable::Loading,
            create: CreateTaskForm::new(),
            updating: HashSet::new(),
            task_errors: HashMap::new(),
        }
    }

    pub fn tasks(&self) -> &Loadable<Vec<Task>> {
        &self.tasks
    }

    pub fn create_form(&self) -> &CreateTaskForm {
        &self.create
    }

    pub fn create_form_mut(&mut self) -> &mut CreateTaskForm {
        &mut self.create
    }

    pub fn is_updating(&self, task_id: &str) -> bool {
        self.updating.contains(task_id)
    }

    /// Inline error under one task, from its last failed toggle.
    pub fn task_error(&self, task_id: &str) -> Option<&str> {
        self.task_errors.get(task_id).map(String::as_str)
    }

    pub async fn mount(&mut self) {
        if !self.scope.is_signed_in() {
            return;
        }
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        let (scope, event_id) = (&self.scope, self.event_id.as_str());
        self.tasks
            .load(async {
                let token = scope.token().await?;
                let mut tasks = scope.api().get_tasks(&token, event_id).await?;
                sort_for_checklist(&mut tasks);
                Ok(tasks)
            })
            .await;
    }

    /// Flip a task between `Completed` and `ToDo`, then refetch.
    ///
    /// Ignored while the same task is already being updated. A failure is
    /// kept as that task's inline error and leaves the list untouched.
    pub async fn toggle(&mut self, task_id: &str) -> Result<(), PlannerError> {
        if self.updating.contains(task_id) {
            return Err(PlannerError::Busy);
        }
        let status = self
            .tasks
            .data()
            .and_then(|tasks| tasks.iter().find(|t| t.id == task_id))
            .map(|t| t.status.toggled())
            .ok_or_else(|| PlannerError::Validation("Task is no longer on this checklist.".into()))?;

        self.updating.insert(task_id.to_string());
        self.task_errors.remove(task_id);
        let scope = &self.scope;
        let result = async {
            let token = scope.token().await?;
            scope.api().update_task_status(&token, task_id, status).await?;
            Ok::<_, PlannerError>(())
        }
        .await;
        self.updating.remove(task_id);

        match result {
            Ok(()) => {
                tracing::info!(task_id, status = status.as_str(), "Task status updated");
                if status.is_completed() {
                    self.scope
                        .notify(RefreshSignal::event(self.event_id.clone(), Resource::Activity));
                }
                self.refresh().await;
                Ok(())
            }
            Err(e) => {
                self.task_errors.insert(task_id.to_string(), e.user_message());
                Err(e)
            }
        }
    }

    /// Submit the add-task form and refetch on success.
    pub async fn create_task(&mut self) -> Result<Task, PlannerError> {
        let task = self.create.submit(&self.scope, &self.event_id).await?;
        self.refresh().await;
        Ok(task)
    }
}
