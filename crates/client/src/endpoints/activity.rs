//! Activity feed and comment endpoints.

use mywedding_core::activity::{ActivityFeedItem, NewComment};

use crate::api::{ApiClient, Call};
use crate::error::ApiError;

impl ApiClient {
    pub async fn get_activity_feed(
        &self,
        token: &str,
        event_id: &str,
    ) -> Result<Vec<ActivityFeedItem>, ApiError> {
        self.fetch(
            Call::get(
                format!("/api/events/{event_id}/activity"),
                "Failed to fetch activity.",
            )
            .bearer(token),
        )
        .await
    }

    pub async fn post_comment(
        &self,
        token: &str,
        event_id: &str,
        comment: &NewComment,
    ) -> Result<serde_json::Value, ApiError> {
        self.fetch_value(
            Call::post(
                format!("/api/events/{event_id}/comments"),
                "Failed to post comment.",
            )
            .bearer(token)
            .json(comment)?,
        )
        .await
    }
}
