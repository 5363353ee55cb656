use mywedding_core::budget::SetTotalBudget;

use crate::context::Scope;
use crate::error::PlannerError;
use crate::form::{Backdrop, FormState};
use crate::refresh::{RefreshSignal, Resource};

/// "Set Budget" modal. Part of onboarding, so the backdrop is locked.
#[derive(Debug, Clone)]
pub struct SetBudgetForm {
    pub total_budget: String,
    state: FormState,
}

impl Default for SetBudgetForm {
    fn default() -> Self {
        Self {
            total_budget: String::new(),
            state: FormState::new(Backdrop::Locked),
        }
    }
}

impl SetBudgetForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn open(&mut self) {
        self.total_budget.clear();
        self.state.open();
    }

    pub fn dismiss_backdrop(&mut self) -> bool {
        self.state.dismiss_backdrop()
    }

    pub async fn submit(&mut self, scope: &Scope, event_id: &str) -> Result<(), PlannerError> {
        let raw = &self.total_budget;
        self.state
            .submit_with(async {
                let body = SetTotalBudget::from_form(raw)?;
                let token = scope.token().await?;
                scope.api().set_total_budget(&token, event_id, &body).await?;
                tracing::info!(event_id, total_budget = body.total_budget, "Budget set");
                scope.notify(RefreshSignal::event(event_id, Resource::Budget));
                scope.notify(RefreshSignal::event(event_id, Resource::Event));
                Ok(())
            })
            .await
    }
}
