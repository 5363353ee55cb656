use mywedding_core::event::{CreateEvent, CreatedEvent};

use crate::context::Scope;
use crate::error::PlannerError;
use crate::form::{Backdrop, FormState};
use crate::refresh::{RefreshSignal, Resource};

/// "Create Event" modal: name and date.
#[derive(Debug, Clone, Default)]
pub struct CreateEventForm {
    pub event_name: String,
    pub event_date: String,
    state: FormState,
}

impl CreateEventForm {
    pub fn new() -> Self {
        Self {
            state: FormState::new(Backdrop::Dismissible),
            ..Default::default()
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn open(&mut self) {
        self.event_name.clear();
        self.event_date.clear();
        self.state.open();
    }

    pub fn close(&mut self) {
        self.state.close();
    }

    pub fn dismiss_backdrop(&mut self) -> bool {
        self.state.dismiss_backdrop()
    }

    pub async fn submit(&mut self, scope: &Scope) -> Result<CreatedEvent, PlannerError> {
        let (name, date) = (&self.event_name, &self.event_date);
        self.state
            .submit_with(async {
                let body = CreateEvent::from_form(name, date)?;
                let token = scope.token().await?;
                let created = scope.api().create_event(&token, &body).await?;
                scope.notify(RefreshSignal::global(Resource::Events));
                Ok(created)
            })
            .await
    }
}
