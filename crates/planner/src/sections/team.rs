use mywedding_core::organizer::Organizer;
use mywedding_core::types::EntityId;

use crate::context::{PlannerContext, Scope};
use crate::error::PlannerError;
use crate::forms::InviteMemberForm;
use crate::refresh::{RefreshSignal, Resource};
use crate::state::Loadable;

/// Organizers of an event plus the "Invite Member" modal.
#[derive(Debug)]
pub struct TeamSection {
    scope: Scope,
    event_id: EntityId,
    organizers: Loadable<Vec<Organizer>>,
    invite: InviteMemberForm,
}

impl TeamSection {
    pub fn new(ctx: &PlannerContext, event_id: impl Into<EntityId>) -> Self {
        Self {
            scope: ctx.scope(),
            event_id: event_id.into(),
            organizers: Loadable::Loading,
            invite: InviteMemberForm::new(),
        }
    }

    pub fn organizers(&self) -> &Loadable<Vec<Organizer>> {
        &self.organizers
    }

    pub fn invite_form(&self) -> &InviteMemberForm {
        &self.invite
    }

    pub fn invite_form_mut(&mut self) -> &mut InviteMemberForm {
        &mut self.invite
    }

    pub async fn mount(&mut self) {
        if !self.scope.is_signed_in() {
            return;
        }
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        let (scope, event_id) = (&self.scope, self.event_id.as_str());
        self.organizers
            .load(async {
                let token = scope.token().await?;
                Ok(scope.api().get_organizers(&token, event_id).await?)
            })
            .await;
    }

    /// Whether the signed-in user may invite and edit.
    pub fn can_edit(&self) -> bool {
        let Some(user) = self.scope.auth().user() else {
            return false;
        };
        self.organizers
            .data()
            .and_then(|list| list.iter().find(|o| o.user_id == user.id))
            .is_some_and(|me| me.permission_level.can_edit())
    }

    /// Submit the invite modal; on success close it and refetch the team.
    pub async fn send_invite(&mut self) -> Result<(), PlannerError> {
        self.invite.submit(&self.scope, &self.event_id).await?;
        self.scope
            .notify(RefreshSignal::event(self.event_id.clone(), Resource::Activity));
        self.refresh().await;
        Ok(())
    }
}
