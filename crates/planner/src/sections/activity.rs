use mywedding_core::activity::{ActivityFeedItem, NewComment};
use mywedding_core::types::EntityId;

use crate::context::{PlannerContext, Scope};
use crate::error::PlannerError;
use crate::state::Loadable;

/// Activity feed with the comment composer.
#[derive(Debug)]
pub struct ActivitySection {
    scope: Scope,
    event_id: EntityId,
    feed: Loadable<Vec<ActivityFeedItem>>,
    /// Composer text, cleared after a successful post.
    pub draft: String,
    posting: bool,
}

impl ActivitySection {
    pub fn new(ctx: &PlannerContext, event_id: impl Into<EntityId>) -> Self {
        Self {
            scope: ctx.scope(),
            event_id: event_id.into(),
            feed: Loadable::Loading,
            draft: String::new(),
            posting: false,
        }
    }

    pub fn feed(&self) -> &Loadable<Vec<ActivityFeedItem>> {
        &self.feed
    }

    pub fn is_posting(&self) -> bool {
        self.posting
    }

    pub async fn mount(&mut self) {
        if !self.scope.is_signed_in() {
            return;
        }
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        let (scope, event_id) = (&self.scope, self.event_id.as_str());
        self.feed
            .load(async {
                let token = scope.token().await?;
                Ok(scope.api().get_activity_feed(&token, event_id).await?)
            })
            .await;
    }

    /// Post the composer text as a comment and refetch the feed.
    ///
    /// Blank text is ignored without a request and reported as `Ok(false)`.
    /// A failed post keeps the draft so the user can retry.
    pub async fn post_comment(&mut self) -> Result<bool, PlannerError> {
        if self.posting || self.draft.trim().is_empty() || !self.scope.is_signed_in() {
            return Ok(false);
        }
        let comment = NewComment::from_text(&self.draft)?;

        self.posting = true;
        let scope = &self.scope;
        let result = async {
            let token = scope.token().await?;
            scope
                .api()
                .post_comment(&token, &self.event_id, &comment)
                .await?;
            Ok::<_, PlannerError>(())
        }
        .await;
        self.posting = false;

        if let Err(e) = result {
            tracing::warn!(event_id = %self.event_id, error = %e, "Failed to post comment");
            return Err(e);
        }
        self.draft.clear();
        self.refresh().await;
        Ok(true)
    }
}
