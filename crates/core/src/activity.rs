//! Activity feed items and comments.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{lenient, EntityId, Timestamp};
use crate::validation::require_non_empty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityItemType {
    UserComment,
    SystemLog,
}

/// Icon bucket for a feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Comment,
    TaskCompleted,
    MemberInvited,
    ExpenseAdded,
    General,
}

/// One entry of `GET /api/events/{id}/activity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityFeedItem {
    pub id: EntityId,
    pub item_type: ActivityItemType,
    pub content: String,
    pub user_first_name: String,
    pub user_last_name: String,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub created_at: Timestamp,
}

impl ActivityFeedItem {
    /// Feed line: comments read `Name: text`, system logs read `Name text`.
    pub fn headline(&self) -> String {
        let name = format!("{} {}", self.user_first_name, self.user_last_name);
        let name = name.trim();
        match self.item_type {
            ActivityItemType::UserComment => format!("{name}: {}", self.content),
            ActivityItemType::SystemLog => format!("{name} {}", self.content),
        }
    }

    /// Classify system logs by the verb the backend writes into `content`.
    pub fn kind(&self) -> ActivityKind {
        if self.item_type == ActivityItemType::UserComment {
            return ActivityKind::Comment;
        }
        if self.content.contains("completed") {
            ActivityKind::TaskCompleted
        } else if self.content.contains("invited") {
            ActivityKind::MemberInvited
        } else if self.content.contains("expense") {
            ActivityKind::ExpenseAdded
        } else {
            ActivityKind::General
        }
    }
}

/// DTO for `POST /api/events/{id}/comments`.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub content: String,
}

impl NewComment {
    pub fn from_text(content: &str) -> Result<Self, CoreError> {
        Ok(Self {
            content: require_non_empty(content, "Comment")?,
        })
    }
}
