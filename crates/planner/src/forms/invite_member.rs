use mywedding_core::organizer::{InviteOrganizer, PermissionLevel};

use crate::context::Scope;
use crate::error::PlannerError;
use crate::form::{Backdrop, FormState};

/// "Invite Member" modal.
#[derive(Debug, Clone)]
pub struct InviteMemberForm {
    pub email: String,
    /// Free-text role; blank falls back to the default invite role.
    pub role: String,
    pub permission_level: PermissionLevel,
    state: FormState,
}

impl Default for InviteMemberForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            role: String::new(),
            permission_level: PermissionLevel::Editor,
            state: FormState::new(Backdrop::Dismissible),
        }
    }
}

impl InviteMemberForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn open(&mut self) {
        self.email.clear();
        self.role.clear();
        self.permission_level = PermissionLevel::Editor;
        self.state.open();
    }

    pub fn close(&mut self) {
        self.state.close();
    }

    pub fn dismiss_backdrop(&mut self) -> bool {
        self.state.dismiss_backdrop()
    }

    pub async fn submit(&mut self, scope: &Scope, event_id: &str) -> Result<(), PlannerError> {
        let (email, role, level) = (&self.email, &self.role, self.permission_level);
        self.state
            .submit_with(async {
                let body = InviteOrganizer::from_form(email, role, level)?;
                let token = scope.token().await?;
                scope.api().invite_organizer(&token, event_id, &body).await?;
                tracing::info!(event_id, email = %body.email, "Invitation sent");
                Ok(())
            })
            .await
    }
}
