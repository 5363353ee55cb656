//! Poll endpoints.

use mywedding_core::poll::{CastVote, NewPoll, Poll};

use crate::api::{ApiClient, Call};
use crate::error::ApiError;

impl ApiClient {
    pub async fn get_polls(&self, token: &str, event_id: &str) -> Result<Vec<Poll>, ApiError> {
        self.fetch(
            Call::get(
                format!("/api/events/{event_id}/polls"),
                "Failed to fetch polls.",
            )
            .bearer(token),
        )
        .await
    }

    pub async fn create_poll(&self, token: &str, poll: &NewPoll) -> Result<serde_json::Value, ApiError> {
        self.fetch_value(
            Call::post("/api/polls", "Failed to create poll.")
                .bearer(token)
                .json(poll)?,
        )
        .await
    }

    /// Cast (or move) the user's vote. Idempotent per user server-side.
    pub async fn vote_in_poll(
        &self,
        token: &str,
        poll_id: &str,
        option_id: &str,
    ) -> Result<serde_json::Value, ApiError> {
        self.fetch_value(
            Call::post(format!("/api/polls/{poll_id}/vote"), "Failed to vote.")
                .bearer(token)
                .json(&CastVote {
                    option_id: option_id.to_string(),
                })?,
        )
        .await
    }
}
