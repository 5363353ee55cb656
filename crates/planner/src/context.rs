//! Root context and per-component scopes.

use std::sync::Arc;

use mywedding_client::{ApiClient, ClientConfig};
use tokio_util::sync::DropGuard;

use crate::error::PlannerError;
use crate::refresh::{RefreshBus, RefreshSignal};
use crate::store::{AuthStore, AuthUser, UiStore};
use crate::token::TokenProvider;

/// Everything a screen needs, created once at the application root.
///
/// Cloning shares the stores, the bus and the HTTP connection pool.
#[derive(Debug, Clone)]
pub struct PlannerContext {
    pub api: ApiClient,
    pub auth: AuthStore,
    pub ui: UiStore,
    pub refresh: RefreshBus,
}

impl PlannerContext {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            auth: AuthStore::new(),
            ui: UiStore::new(),
            refresh: RefreshBus::default(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, PlannerError> {
        Ok(Self::new(ApiClient::new(config)?))
    }

    /// Establish a session after the identity provider signed the user in.
    ///
    /// Forces a token refresh, registers the user with the backend
    /// (`sync-user`), and only then publishes the user to the auth store.
    /// On failure the store stays signed out.
    pub async fn sign_in(
        &self,
        user: AuthUser,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<(), PlannerError> {
        let token = tokens.bearer_token(true).await?;
        if let Err(e) = self.api.sync_user(&token).await {
            tracing::error!(user_id = %user.id, error = %e, "User sync failed");
            return Err(e.into());
        }
        self.auth.install_provider(tokens).await;
        tracing::info!(user_id = %user.id, "Signed in");
        self.auth.publish_user(user);
        Ok(())
    }

    /// Clear the session and every global UI flag.
    pub async fn sign_out(&self) {
        self.auth.clear().await;
        self.ui.reset();
        tracing::info!("Signed out");
    }

    /// A scope for one component. Dropping it cancels its in-flight requests.
    pub fn scope(&self) -> Scope {
        let api = self.api.scoped();
        let guard = api.cancellation_token().clone().drop_guard();
        Scope {
            api,
            auth: self.auth.clone(),
            refresh: self.refresh.clone(),
            _guard: Arc::new(guard),
        }
    }
}

/// A component's view of the context, owning a cancellable API client.
///
/// Clones share the same cancellation scope; the scope is cancelled when
/// the last clone is dropped.
#[derive(Debug, Clone)]
pub struct Scope {
    api: ApiClient,
    auth: AuthStore,
    refresh: RefreshBus,
    _guard: Arc<DropGuard>,
}

impl Scope {
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn auth(&self) -> &AuthStore {
        &self.auth
    }

    pub fn is_signed_in(&self) -> bool {
        self.auth.is_signed_in()
    }

    pub async fn token(&self) -> Result<String, PlannerError> {
        self.auth.token().await
    }

    pub fn notify(&self, signal: RefreshSignal) {
        self.refresh.publish(signal);
    }

    /// Cancel every in-flight request made through this scope.
    pub fn cancel(&self) {
        self.api.cancel();
    }
}
