//! `/api/events` endpoints.

use mywedding_core::event::{CreateEvent, CreatedEvent, Event};
use mywedding_core::style_quiz::UpdatePreferences;

use crate::api::{ApiClient, Call};
use crate::error::ApiError;

impl ApiClient {
    /// Fetch all events the signed-in user organizes.
    pub async fn get_events(&self, token: &str) -> Result<Vec<Event>, ApiError> {
        self.fetch(Call::get("/api/events", "Failed to fetch events.").bearer(token))
            .await
    }

    pub async fn create_event(
        &self,
        token: &str,
        event: &CreateEvent,
    ) -> Result<CreatedEvent, ApiError> {
        let created: CreatedEvent = self
            .fetch(
                Call::post("/api/events", "Failed to create event.")
                    .bearer(token)
                    .json(event)?,
            )
            .await?;
        tracing::info!(event_id = %created.event_id, "Event created");
        Ok(created)
    }

    /// Fetch one event. Returns `None` when the backend answers `404`.
    pub async fn get_event_by_id(
        &self,
        token: &str,
        event_id: &str,
    ) -> Result<Option<Event>, ApiError> {
        self.fetch_optional(
            Call::get(
                format!("/api/events/{event_id}"),
                "Failed to fetch event details.",
            )
            .bearer(token),
        )
        .await
    }

    /// Store the style-quiz answers on an event.
    pub async fn set_event_preferences(
        &self,
        token: &str,
        event_id: &str,
        preferences: &UpdatePreferences,
    ) -> Result<serde_json::Value, ApiError> {
        self.fetch_value(
            Call::put(
                format!("/api/events/{event_id}/preferences"),
                "Failed to save preferences.",
            )
            .bearer(token)
            .json(preferences)?,
        )
        .await
    }
}
