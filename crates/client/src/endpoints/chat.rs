//! Conversation (chat channel) endpoints.

use mywedding_core::chat::{Conversation, Message, NewMessage};

use crate::api::{ApiClient, Call};
use crate::error::ApiError;

impl ApiClient {
    pub async fn get_conversations(
        &self,
        token: &str,
        event_id: &str,
    ) -> Result<Vec<Conversation>, ApiError> {
        self.fetch(
            Call::get(
                format!("/api/events/{event_id}/conversations"),
                "Failed to fetch conversations.",
            )
            .bearer(token),
        )
        .await
    }

    pub async fn get_messages(
        &self,
        token: &str,
        conversation_id: &str,
    ) -> Result<Vec<Message>, ApiError> {
        self.fetch(
            Call::get(
                format!("/api/conversations/{conversation_id}/messages"),
                "Failed to fetch messages.",
            )
            .bearer(token),
        )
        .await
    }

    pub async fn post_message(
        &self,
        token: &str,
        conversation_id: &str,
        message: &NewMessage,
    ) -> Result<Message, ApiError> {
        self.fetch(
            Call::post(
                format!("/api/conversations/{conversation_id}/messages"),
                "Failed to send message.",
            )
            .bearer(token)
            .json(message)?,
        )
        .await
    }
}
