//! Channel-scoped team chat.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{lenient, EntityId, Timestamp};
use crate::validation::require_non_empty;

/// A chat channel belonging to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: EntityId,
    pub name: String,
}

/// A message from `GET /api/conversations/{id}/messages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: EntityId,
    pub content: String,
    pub sender_id: EntityId,
    #[serde(default)]
    pub sender_first_name: String,
    #[serde(default)]
    pub sender_last_name: String,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub created_at: Timestamp,
    #[serde(default)]
    pub attachment: Option<String>,
}

impl Message {
    pub fn sender_name(&self) -> String {
        format!("{} {}", self.sender_first_name, self.sender_last_name)
            .trim()
            .to_string()
    }

    pub fn is_from(&self, user_id: &str) -> bool {
        self.sender_id == user_id
    }
}

/// DTO for `POST /api/conversations/{id}/messages`.
#[derive(Debug, Clone, Serialize)]
pub struct NewMessage {
    pub content: String,
}

impl NewMessage {
    pub fn from_text(content: &str) -> Result<Self, CoreError> {
        Ok(Self {
            content: require_non_empty(content, "Message")?,
        })
    }
}
