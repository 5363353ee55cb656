//! Accepting an emailed invitation link.

use crate::context::Scope;
use crate::error::PlannerError;
use mywedding_core::organizer::AcceptInvitation;

pub const MISSING_TOKEN_MESSAGE: &str = "Invalid invitation link. Missing token.";
pub const JOINED_MESSAGE: &str =
    "Welcome to the team! You have successfully joined the wedding planning team.";
pub const ALREADY_MEMBER_MESSAGE: &str =
    "It looks like you're already a member of this event, or this invitation has already been used.";
pub const ACCEPT_FAILED_MESSAGE: &str =
    "Failed to accept invitation. The link may be expired or invalid.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvitationOutcome {
    Success,
    /// The backend rejected the token as used, invalid or expired.
    AlreadyMember,
    Failed(String),
}

impl InvitationOutcome {
    pub fn message(&self) -> &str {
        match self {
            InvitationOutcome::Success => JOINED_MESSAGE,
            InvitationOutcome::AlreadyMember => ALREADY_MEMBER_MESSAGE,
            InvitationOutcome::Failed(msg) => msg,
        }
    }
}

/// Redeem `token` for the signed-in user.
///
/// Returns `Err(NotSignedIn)` when nobody is signed in so the caller can
/// send the user to sign in and come back with the same token. Every other
/// failure is folded into the outcome.
pub async fn accept_invitation(
    scope: &Scope,
    token: Option<&str>,
) -> Result<InvitationOutcome, PlannerError> {
    if !scope.is_signed_in() {
        return Err(PlannerError::NotSignedIn);
    }
    let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(InvitationOutcome::Failed(MISSING_TOKEN_MESSAGE.into()));
    };

    let bearer = scope.token().await?;
    let body = AcceptInvitation {
        token: token.to_string(),
    };
    match scope.api().accept_invitation(&bearer, &body).await {
        Ok(_) => {
            tracing::info!("Invitation accepted");
            Ok(InvitationOutcome::Success)
        }
        Err(e) => {
            let message = e.user_message();
            tracing::warn!(error = %e, "Invitation rejected");
            Ok(classify_rejection(&message))
        }
    }
}

fn classify_rejection(message: &str) -> InvitationOutcome {
    let lower = message.to_lowercase();
    if ["invalid", "expired", "already"]
        .iter()
        .any(|needle| lower.contains(needle))
    {
        return InvitationOutcome::AlreadyMember;
    }
    if message.trim().is_empty() {
        return InvitationOutcome::Failed(ACCEPT_FAILED_MESSAGE.into());
    }
    InvitationOutcome::Failed(message.to_string())
}
