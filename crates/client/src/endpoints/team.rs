//! Organizer membership and invitation endpoints.

use mywedding_core::organizer::{AcceptInvitation, InviteOrganizer, Organizer};

use crate::api::{ApiClient, Call};
use crate::error::ApiError;

impl ApiClient {
    pub async fn get_organizers(
        &self,
        token: &str,
        event_id: &str,
    ) -> Result<Vec<Organizer>, ApiError> {
        self.fetch(
            Call::get(
                format!("/api/events/{event_id}/organizers"),
                "Failed to fetch event organizers.",
            )
            .bearer(token),
        )
        .await
    }

    /// Invite a new organizer; the backend emails them an acceptance link.
    pub async fn invite_organizer(
        &self,
        token: &str,
        event_id: &str,
        invite: &InviteOrganizer,
    ) -> Result<serde_json::Value, ApiError> {
        self.fetch_value(
            Call::post(
                format!("/api/events/{event_id}/organizers"),
                "Failed to send invitation.",
            )
            .bearer(token)
            .json(invite)?,
        )
        .await
    }

    /// Redeem an invitation token for the signed-in user.
    pub async fn accept_invitation(
        &self,
        token: &str,
        invitation: &AcceptInvitation,
    ) -> Result<serde_json::Value, ApiError> {
        self.fetch_value(
            Call::post("/api/invitations/accept", "Failed to accept invitation.")
                .bearer(token)
                .json(invitation)?,
        )
        .await
    }
}
