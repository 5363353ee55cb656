//! Process-wide auth and UI stores.
//!
//! Both are cheap to clone and backed by `tokio::sync::watch`, so any number
//! of components can read the current value or await changes. They are
//! created once at the root ([`crate::PlannerContext::new`]) and reset on
//! sign-out.

use std::sync::Arc;

use mywedding_core::types::EntityId;
use tokio::sync::{watch, RwLock};

use crate::error::PlannerError;
use crate::token::TokenProvider;

// ---------------------------------------------------------------------------
// AuthStore
// ---------------------------------------------------------------------------

/// The signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: EntityId,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl AuthUser {
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            email: None,
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// First word of the display name, or `"You"`.
    pub fn first_name(&self) -> &str {
        self.display_name
            .as_deref()
            .and_then(|n| n.split_whitespace().next())
            .unwrap_or("You")
    }
}

/// Holds the current user and the provider that mints their tokens.
#[derive(Clone)]
pub struct AuthStore {
    user: Arc<watch::Sender<Option<AuthUser>>>,
    tokens: Arc<RwLock<Option<Arc<dyn TokenProvider>>>>,
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore")
            .field("user", &*self.user.borrow())
            .finish_non_exhaustive()
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStore {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            user: Arc::new(tx),
            tokens: Arc::new(RwLock::new(None)),
        }
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.user.borrow().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.borrow().is_some()
    }

    /// Watch sign-in and sign-out transitions.
    pub fn subscribe(&self) -> watch::Receiver<Option<AuthUser>> {
        self.user.subscribe()
    }

    /// Fetch a bearer token for the current user.
    pub async fn token(&self) -> Result<String, PlannerError> {
        self.token_with(false).await
    }

    pub(crate) async fn token_with(&self, force_refresh: bool) -> Result<String, PlannerError> {
        if !self.is_signed_in() {
            return Err(PlannerError::NotSignedIn);
        }
        let provider = self
            .tokens
            .read()
            .await
            .clone()
            .ok_or(PlannerError::NotSignedIn)?;
        provider.bearer_token(force_refresh).await
    }

    pub(crate) async fn install_provider(&self, provider: Arc<dyn TokenProvider>) {
        *self.tokens.write().await = Some(provider);
    }

    pub(crate) fn publish_user(&self, user: AuthUser) {
        self.user.send_replace(Some(user));
    }

    /// Forget the user and their token provider.
    pub async fn clear(&self) {
        self.user.send_replace(None);
        *self.tokens.write().await = None;
    }
}

// ---------------------------------------------------------------------------
// UiStore
// ---------------------------------------------------------------------------

/// Global UI flags shared across screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub is_chat_open: bool,
    pub chat_event_id: Option<EntityId>,
    pub is_hub_open: bool,
}

#[derive(Debug, Clone)]
pub struct UiStore {
    state: Arc<watch::Sender<UiState>>,
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UiStore {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(UiState::default());
        Self {
            state: Arc::new(tx),
        }
    }

    pub fn snapshot(&self) -> UiState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    pub fn open_chat(&self) {
        self.state.send_modify(|s| s.is_chat_open = true);
    }

    pub fn close_chat(&self) {
        self.state.send_modify(|s| s.is_chat_open = false);
    }

    pub fn set_chat_event_id(&self, event_id: Option<EntityId>) {
        self.state.send_modify(|s| s.chat_event_id = event_id);
    }

    pub fn open_hub(&self) {
        self.state.send_modify(|s| s.is_hub_open = true);
    }

    pub fn close_hub(&self) {
        self.state.send_modify(|s| s.is_hub_open = false);
    }

    pub fn is_hub_open(&self) -> bool {
        self.state.borrow().is_hub_open
    }

    pub fn reset(&self) {
        self.state.send_replace(UiState::default());
    }
}
