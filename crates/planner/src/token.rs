//! Bearer-token seam between the planner and the identity provider.

use async_trait::async_trait;

use crate::error::PlannerError;

/// Source of bearer tokens for the signed-in user.
///
/// The planner asks for a token before every request and never caches one
/// itself; refresh policy belongs to the provider.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Return a valid ID token. `force_refresh` bypasses any provider-side
    /// cache (used once right after sign-in).
    async fn bearer_token(&self, force_refresh: bool) -> Result<String, PlannerError>;
}

/// A fixed token, for the CLI and tests.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn bearer_token(&self, _force_refresh: bool) -> Result<String, PlannerError> {
        if self.0.trim().is_empty() {
            return Err(PlannerError::Token("empty token".into()));
        }
        Ok(self.0.clone())
    }
}
