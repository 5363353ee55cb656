//! The event page: every section for one event, kept consistent through the
//! refresh bus.

use mywedding_core::types::EntityId;
use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::context::PlannerContext;
use crate::hub::CollaborationHub;
use crate::refresh::{RefreshSignal, Resource};
use crate::sections::{
    ActivitySection, BudgetSection, ChecklistSection, EventHeader, PollsSection, StyleSection,
    TeamSection,
};

#[derive(Debug)]
pub struct EventWorkspace {
    event_id: EntityId,
    pub header: EventHeader,
    pub team: TeamSection,
    pub checklist: ChecklistSection,
    pub budget: BudgetSection,
    pub activity: ActivitySection,
    pub polls: PollsSection,
    pub style: StyleSection,
    pub hub: CollaborationHub,
    signals: broadcast::Receiver<RefreshSignal>,
}

impl EventWorkspace {
    pub fn new(ctx: &PlannerContext, event_id: impl Into<EntityId>) -> Self {
        let event_id = event_id.into();
        Self {
            header: EventHeader::new(ctx, event_id.clone()),
            team: TeamSection::new(ctx, event_id.clone()),
            checklist: ChecklistSection::new(ctx, event_id.clone()),
            budget: BudgetSection::new(ctx, event_id.clone()),
            activity: ActivitySection::new(ctx, event_id.clone()),
            polls: PollsSection::new(ctx, event_id.clone()),
            style: StyleSection::new(ctx, event_id.clone()),
            hub: CollaborationHub::new(ctx, event_id.clone()),
            signals: ctx.refresh.subscribe(),
            event_id,
        }
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    /// Mount every section concurrently.
    pub async fn mount(&mut self) {
        futures::join!(
            self.header.mount(),
            self.team.mount(),
            self.checklist.mount(),
            self.budget.mount(),
            self.activity.mount(),
            self.polls.mount(),
            self.style.mount(),
        );
    }

    /// Drain pending refresh signals and refetch each affected section once.
    ///
    /// Returns the resources that were refetched.
    pub async fn apply_refreshes(&mut self) -> Vec<Resource> {
        let mut pending: Vec<Resource> = Vec::new();
        loop {
            match self.signals.try_recv() {
                Ok(signal) if signal.concerns(&self.event_id) => {
                    if !pending.contains(&signal.resource) {
                        pending.push(signal.resource);
                    }
                }
                Ok(_) => {}
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Refresh signals lagged, remounting workspace");
                    self.mount().await;
                    return Vec::new();
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }

        for resource in &pending {
            match resource {
                Resource::Event => self.header.refresh().await,
                Resource::Budget => self.budget.refresh().await,
                Resource::Activity => self.activity.refresh().await,
                Resource::Polls => {
                    self.polls.refresh().await;
                    self.hub.refresh_polls().await;
                }
                Resource::Preferences => {
                    self.style.refresh().await;
                    self.header.refresh().await;
                }
                Resource::Events => {}
            }
        }
        pending
    }
}
