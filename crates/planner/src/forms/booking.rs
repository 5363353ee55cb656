use mywedding_core::event::{parse_form_date, Event};
use mywedding_core::types::EntityId;
use mywedding_core::vendor::{NewBooking, ServiceOffering};

use crate::context::Scope;
use crate::error::PlannerError;
use crate::form::{Backdrop, FormState};
use crate::refresh::{RefreshSignal, Resource};
use crate::state::Loadable;

pub const EVENTS_UNAVAILABLE_MESSAGE: &str = "Could not load your events.";
pub const MISSING_BOOKING_FIELDS_MESSAGE: &str = "Please select an event and a service date.";

/// Booking modal opened from a vendor profile for one service.
#[derive(Debug, Clone)]
pub struct BookingForm {
    service: ServiceOffering,
    events: Loadable<Vec<Event>>,
    pub selected_event_id: Option<EntityId>,
    pub service_date: String,
    state: FormState,
}

impl BookingForm {
    pub fn new(service: ServiceOffering) -> Self {
        Self {
            service,
            events: Loadable::Loading,
            selected_event_id: None,
            service_date: String::new(),
            state: FormState::new(Backdrop::Dismissible),
        }
    }

    pub fn service(&self) -> &ServiceOffering {
        &self.service
    }

    pub fn events(&self) -> &Loadable<Vec<Event>> {
        &self.events
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Open and load the user's events, preselecting the first.
    pub async fn open(&mut self, scope: &Scope) {
        self.state.open();
        self.selected_event_id = None;
        self.service_date.clear();
        self.events
            .load(async {
                let token = scope.token().await?;
                Ok(scope.api().get_events(&token).await?)
            })
            .await;
        match &self.events {
            Loadable::Ready(events) => {
                self.selected_event_id = events.first().map(|e| e.id.clone());
            }
            Loadable::Failed(_) => self.state.set_error(EVENTS_UNAVAILABLE_MESSAGE),
            Loadable::Loading => {}
        }
    }

    pub fn close(&mut self) {
        self.state.close();
    }

    pub fn dismiss_backdrop(&mut self) -> bool {
        self.state.dismiss_backdrop()
    }

    pub async fn submit(&mut self, scope: &Scope) -> Result<(), PlannerError> {
        let (event_id, date, service) = (
            self.selected_event_id.as_deref(),
            &self.service_date,
            &self.service,
        );
        self.state
            .submit_with(async {
                if event_id.map_or(true, |id| id.trim().is_empty()) || date.trim().is_empty() {
                    return Err(PlannerError::Validation(MISSING_BOOKING_FIELDS_MESSAGE.into()));
                }
                let service_date = parse_form_date(date, "Service date")?;
                let body = NewBooking::new(event_id, service, service_date)?;
                let token = scope.token().await?;
                scope.api().create_booking(&token, &body).await?;
                scope.notify(RefreshSignal::event(body.event_id.clone(), Resource::Activity));
                Ok(())
            })
            .await
    }
}
