use mywedding_core::event::{CreatedEvent, Event};
use mywedding_core::types::EntityId;
use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::context::{PlannerContext, Scope};
use crate::error::PlannerError;
use crate::forms::CreateEventForm;
use crate::refresh::{RefreshSignal, Resource};
use crate::state::Loadable;

pub const NO_EVENTS_TITLE: &str = "No Events Found";
pub const NO_EVENTS_HINT: &str = "Click \"Create New Event\" to start planning your big day!";

/// One event tile on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub event_id: EntityId,
    pub title: String,
    /// e.g. `Thursday, January 1, 2026`.
    pub date_label: String,
}

impl From<&Event> for EventCard {
    fn from(event: &Event) -> Self {
        Self {
            event_id: event.id.clone(),
            title: event.event_name.clone(),
            date_label: event.event_date.format("%A, %B %-d, %Y").to_string(),
        }
    }
}

/// What the dashboard body shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    Loading,
    Failed(String),
    Empty,
    Cards(Vec<EventCard>),
}

/// The signed-in user's event list plus the "Create Event" entry point.
#[derive(Debug)]
pub struct Dashboard {
    scope: Scope,
    events: Loadable<Vec<Event>>,
    create: CreateEventForm,
    signals: broadcast::Receiver<RefreshSignal>,
}

impl Dashboard {
    pub fn new(ctx: &PlannerContext) -> Self {
        Self {
            scope: ctx.scope(),
            events: Loadable::Loading,
            create: CreateEventForm::new(),
            signals: ctx.refresh.subscribe(),
        }
    }

    pub fn events(&self) -> &Loadable<Vec<Event>> {
        &self.events
    }

    pub fn create_form(&self) -> &CreateEventForm {
        &self.create
    }

    pub fn create_form_mut(&mut self) -> &mut CreateEventForm {
        &mut self.create
    }

    pub async fn mount(&mut self) {
        if !self.scope.is_signed_in() {
            return;
        }
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        let scope = &self.scope;
        self.events
            .load(async {
                let token = scope.token().await?;
                Ok(scope.api().get_events(&token).await?)
            })
            .await;
    }

    /// Drain pending refresh signals and refetch the list if the event set
    /// changed. Returns whether a refetch happened.
    pub async fn apply_refreshes(&mut self) -> bool {
        let mut stale = false;
        loop {
            match self.signals.try_recv() {
                Ok(signal) => stale |= signal.resource == Resource::Events,
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Refresh signals lagged, refetching events");
                    stale = true;
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        if stale {
            self.refresh().await;
        }
        stale
    }

    pub fn view(&self) -> DashboardView {
        match &self.events {
            Loadable::Loading => DashboardView::Loading,
            Loadable::Failed(msg) => DashboardView::Failed(msg.clone()),
            Loadable::Ready(events) if events.is_empty() => DashboardView::Empty,
            Loadable::Ready(events) => {
                DashboardView::Cards(events.iter().map(EventCard::from).collect())
            }
        }
    }

    /// Submit the create form. The form announces the new event, so the
    /// list is refetched through the refresh signal.
    pub async fn create_event(&mut self) -> Result<CreatedEvent, PlannerError> {
        let created = self.create.submit(&self.scope).await?;
        self.apply_refreshes().await;
        Ok(created)
    }
}
