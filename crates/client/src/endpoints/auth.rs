//! Session bootstrap endpoint.

use crate::api::{ApiClient, Call};
use crate::error::ApiError;

impl ApiClient {
    /// Create or refresh the backend's user record for the token's subject.
    pub async fn sync_user(&self, token: &str) -> Result<(), ApiError> {
        self.execute(
            Call::post("/api/auth/sync-user", "Failed to sync user with backend.").bearer(token),
        )
        .await
    }
}
