//! Event team membership (organizers) and invitations.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::EntityId;
use crate::validation::validate_email;

/// Access level of an organizer on one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionLevel {
    Owner,
    Editor,
    Viewer,
}

impl PermissionLevel {
    /// Label shown next to a team member.
    pub fn label(self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Editor => "Can Edit",
            Self::Viewer => "Can View",
        }
    }

    /// Whether members at this level may change event data.
    pub fn can_edit(self) -> bool {
        matches!(self, Self::Owner | Self::Editor)
    }
}

/// A membership record returned by `GET /api/events/{id}/organizers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organizer {
    pub user_id: EntityId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub permission_level: PermissionLevel,
}

impl Organizer {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Up to two uppercase initials for the avatar bubble.
    pub fn initials(&self) -> String {
        initials(&self.first_name, &self.last_name)
    }
}

/// Initials from a first and last name; `?` when both are blank.
pub fn initials(first: &str, last: &str) -> String {
    let out: String = [first, last]
        .iter()
        .filter_map(|part| part.trim().chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if out.is_empty() {
        "?".to_string()
    } else {
        out
    }
}

/// Role assigned to invitees when the form does not specify one.
pub const DEFAULT_INVITE_ROLE: &str = "Family";

/// DTO for `POST /api/events/{id}/organizers`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteOrganizer {
    pub email: String,
    pub role: String,
    pub permission_level: PermissionLevel,
}

impl InviteOrganizer {
    /// Build an invitation from form input. A blank role falls back to
    /// [`DEFAULT_INVITE_ROLE`].
    pub fn from_form(
        email: &str,
        role: &str,
        permission_level: PermissionLevel,
    ) -> Result<Self, CoreError> {
        if permission_level == PermissionLevel::Owner {
            return Err(CoreError::Validation(
                "Invitees cannot be granted owner access.".to_string(),
            ));
        }
        let role = match role.trim() {
            "" => DEFAULT_INVITE_ROLE.to_string(),
            r => r.to_string(),
        };
        Ok(Self {
            email: validate_email(email)?,
            role,
            permission_level,
        })
    }
}

/// DTO for `POST /api/invitations/accept`.
#[derive(Debug, Clone, Serialize)]
pub struct AcceptInvitation {
    pub token: String,
}
