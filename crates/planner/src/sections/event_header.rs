use mywedding_core::event::Event;
use mywedding_core::types::EntityId;

use crate::context::{PlannerContext, Scope};
use crate::error::PlannerError;
use crate::state::Loadable;

pub const EVENT_NOT_FOUND_MESSAGE: &str =
    "Event not found or you don't have permission to view it.";

/// Title bar of the event page: name, date and budget.
#[derive(Debug)]
pub struct EventHeader {
    scope: Scope,
    event_id: EntityId,
    event: Loadable<Event>,
}

impl EventHeader {
    pub fn new(ctx: &PlannerContext, event_id: impl Into<EntityId>) -> Self {
        Self {
            scope: ctx.scope(),
            event_id: event_id.into(),
            event: Loadable::Loading,
        }
    }

    pub fn event(&self) -> &Loadable<Event> {
        &self.event
    }

    pub async fn mount(&mut self) {
        if !self.scope.is_signed_in() {
            return;
        }
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        let (scope, event_id) = (&self.scope, self.event_id.as_str());
        self.event
            .load(async {
                let token = scope.token().await?;
                scope
                    .api()
                    .get_event_by_id(&token, event_id)
                    .await?
                    .ok_or_else(|| PlannerError::NotFound(EVENT_NOT_FOUND_MESSAGE.into()))
            })
            .await;
    }

    /// `Total Budget: LKR 1,500,000` style label, `None` until a budget is set.
    pub fn budget_label(&self) -> Option<String> {
        let event = self.event.data()?;
        event
            .total_budget
            .filter(|_| event.has_budget())
            .map(|amount| format!("Total Budget: LKR {}", group_thousands(amount)))
    }
}

fn group_thousands(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if whole < 0 {
        out.insert(0, '-');
    }
    out
}
