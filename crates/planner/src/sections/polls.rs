use mywedding_core::poll::{NewPoll, Poll, MIN_POLL_OPTIONS};
use mywedding_core::types::EntityId;

use crate::context::{PlannerContext, Scope};
use crate::error::PlannerError;
use crate::form::FormState;
use crate::refresh::{RefreshSignal, Resource};
use crate::state::Loadable;

/// Unsaved poll being composed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollDraft {
    pub title: String,
    options: Vec<String>,
}

impl Default for PollDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            options: vec![String::new(); MIN_POLL_OPTIONS],
        }
    }
}

impl PollDraft {
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn set_option(&mut self, index: usize, text: impl Into<String>) {
        if let Some(slot) = self.options.get_mut(index) {
            *slot = text.into();
        }
    }

    pub fn add_option(&mut self) {
        self.options.push(String::new());
    }

    /// Remove an option. Refused when only the minimum remain.
    pub fn remove_option(&mut self, index: usize) -> bool {
        if self.options.len() <= MIN_POLL_OPTIONS || index >= self.options.len() {
            return false;
        }
        self.options.remove(index);
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Event polls: list, vote and create.
#[derive(Debug)]
pub struct PollsSection {
    scope: Scope,
    event_id: EntityId,
    polls: Loadable<Vec<Poll>>,
    draft: PollDraft,
    create: FormState,
    vote_error: Option<String>,
}

impl PollsSection {
    pub fn new(ctx: &PlannerContext, event_id: impl Into<EntityId>) -> Self {
        let mut create = FormState::default();
        create.open();
        Self {
            scope: ctx.scope(),
            event_id: event_id.into(),
            polls: Loadable::Loading,
            draft: PollDraft::default(),
            create,
            vote_error: None,
        }
    }

    pub fn polls(&self) -> &Loadable<Vec<Poll>> {
        &self.polls
    }

    pub fn draft(&self) -> &PollDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut PollDraft {
        &mut self.draft
    }

    pub fn create_state(&self) -> &FormState {
        &self.create
    }

    pub fn vote_error(&self) -> Option<&str> {
        self.vote_error.as_deref()
    }

    pub async fn mount(&mut self) {
        if !self.scope.is_signed_in() {
            return;
        }
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        let (scope, event_id) = (&self.scope, self.event_id.as_str());
        self.polls
            .load(async {
                let token = scope.token().await?;
                Ok(scope.api().get_polls(&token, event_id).await?)
            })
            .await;
    }

    /// Vote for `option_id` and refetch to pick up the new tallies.
    pub async fn vote(&mut self, poll_id: &str, option_id: &str) -> Result<(), PlannerError> {
        self.vote_error = None;
        let scope = &self.scope;
        let known = self
            .polls
            .data()
            .and_then(|polls| polls.iter().find(|p| p.id == poll_id));
        let result = async {
            if let Some(poll) = known {
                poll.option(option_id)?;
            }
            let token = scope.token().await?;
            scope.api().vote_in_poll(&token, poll_id, option_id).await?;
            Ok::<_, PlannerError>(())
        }
        .await;

        if let Err(e) = result {
            self.vote_error = Some(e.user_message());
            return Err(e);
        }
        tracing::info!(poll_id, option_id, "Vote cast");
        self.scope
            .notify(RefreshSignal::event(self.event_id.clone(), Resource::Polls));
        self.refresh().await;
        Ok(())
    }

    /// Create a poll from the draft, reset it and refetch.
    pub async fn create_poll(&mut self) -> Result<(), PlannerError> {
        let (scope, event_id, draft) = (&self.scope, self.event_id.as_str(), &self.draft);
        self.create
            .submit_with(async {
                let body = NewPoll::new(event_id, &draft.title, draft.options())?;
                let token = scope.token().await?;
                scope.api().create_poll(&token, &body).await?;
                tracing::info!(event_id, title = %body.title, "Poll created");
                Ok(())
            })
            .await?;
        // The composer stays visible under the list.
        self.create.keep_open();
        self.draft.reset();
        self.scope
            .notify(RefreshSignal::event(self.event_id.clone(), Resource::Polls));
        self.refresh().await;
        Ok(())
    }
}
