//! REST API client for the MyWedding backend.
//!
//! [`ApiClient`] owns the HTTP plumbing shared by every endpoint wrapper:
//! URL construction, bearer authentication, error-body extraction, the
//! `GET` retry policy and cancellation. The wrappers themselves live in
//! [`crate::endpoints`], one module per backend resource.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::config::ClientConfig;
use crate::error::{message_from_body, ApiError};
use crate::retry::{next_delay, RetryPolicy};

/// HTTP client for the MyWedding backend.
///
/// Cloning is cheap and shares the connection pool and cancellation token.
/// Use [`ApiClient::scoped`] to derive a client whose in-flight requests can
/// be cancelled independently (one per UI component).
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
    cancel: CancellationToken,
}

/// One logical API call, possibly issued several times by the retry loop.
pub(crate) struct Call<'a> {
    method: Method,
    path: String,
    token: Option<&'a str>,
    query: Vec<(&'static str, &'a str)>,
    body: Option<serde_json::Value>,
    fallback: &'static str,
}

impl<'a> Call<'a> {
    pub(crate) fn new(method: Method, path: impl Into<String>, fallback: &'static str) -> Self {
        Self {
            method,
            path: path.into(),
            token: None,
            query: Vec::new(),
            body: None,
            fallback,
        }
    }

    pub(crate) fn get(path: impl Into<String>, fallback: &'static str) -> Self {
        Self::new(Method::GET, path, fallback)
    }

    pub(crate) fn post(path: impl Into<String>, fallback: &'static str) -> Self {
        Self::new(Method::POST, path, fallback)
    }

    pub(crate) fn put(path: impl Into<String>, fallback: &'static str) -> Self {
        Self::new(Method::PUT, path, fallback)
    }

    pub(crate) fn delete(path: impl Into<String>, fallback: &'static str) -> Self {
        Self::new(Method::DELETE, path, fallback)
    }

    pub(crate) fn bearer(mut self, token: &'a str) -> Self {
        self.token = Some(token);
        self
    }

    pub(crate) fn query(mut self, pairs: Vec<(&'static str, &'a str)>) -> Self {
        self.query = pairs;
        self
    }

    pub(crate) fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
            retry: config.retry.clone(),
            cancel: CancellationToken::new(),
        })
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for sharing a connection pool).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retry: RetryPolicy::default(),
            cancel: CancellationToken::new(),
        }
    }

    /// Replace the `GET` retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Derive a client whose cancellation token is a child of this one.
    ///
    /// Cancelling the scoped client leaves the parent usable; cancelling the
    /// parent cancels every scope derived from it.
    pub fn scoped(&self) -> Self {
        Self {
            cancel: self.cancel.child_token(),
            ..self.clone()
        }
    }

    /// Cancel every in-flight and future request made through this scope.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    // ---- request helpers used by the endpoint modules ----

    /// Execute a call and decode the JSON response.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, call: Call<'_>) -> Result<T, ApiError> {
        let body = self.run(&call).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Execute a call, mapping `404 Not Found` to `None`.
    pub(crate) async fn fetch_optional<T: DeserializeOwned>(
        &self,
        call: Call<'_>,
    ) -> Result<Option<T>, ApiError> {
        match self.run(&call).await {
            Ok(body) => Ok(Some(serde_json::from_slice(&body)?)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Execute a call whose response body is free-form JSON.
    ///
    /// An empty body (e.g. `204 No Content`) decodes to `Value::Null`.
    pub(crate) async fn fetch_value(&self, call: Call<'_>) -> Result<serde_json::Value, ApiError> {
        let body = self.run(&call).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// Execute a call and discard the response body.
    pub(crate) async fn execute(&self, call: Call<'_>) -> Result<(), ApiError> {
        self.run(&call).await.map(|_| ())
    }

    /// Run the call with cancellation and, for `GET`, bounded retry.
    async fn run(&self, call: &Call<'_>) -> Result<Vec<u8>, ApiError> {
        let max_attempts = if call.method == Method::GET {
            self.retry.max_attempts.max(1)
        } else {
            1
        };
        let mut delay = self.retry.initial_delay;
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            let result = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => Err(ApiError::Cancelled),
                result = self.attempt(call) => result,
            };

            match result {
                Err(e) if attempt < max_attempts && e.is_retryable() => {
                    tracing::warn!(
                        method = %call.method,
                        path = %call.path,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "API request failed, retrying",
                    );
                    tokio::select! {
                        biased;
                        _ = self.cancel.cancelled() => return Err(ApiError::Cancelled),
                        _ = tokio::time::sleep(delay) => {}
                    }
                    delay = next_delay(delay, &self.retry);
                }
                Err(e) => {
                    if !matches!(e, ApiError::Cancelled) {
                        tracing::debug!(
                            method = %call.method,
                            path = %call.path,
                            attempt,
                            error = %e,
                            "API request failed",
                        );
                    }
                    return Err(e);
                }
                Ok(body) => return Ok(body),
            }
        }
    }

    /// Issue a single HTTP request and read the whole body.
    async fn attempt(&self, call: &Call<'_>) -> Result<Vec<u8>, ApiError> {
        let mut request = self
            .client
            .request(call.method.clone(), format!("{}{}", self.base_url, call.path));
        if let Some(token) = call.token {
            request = request.bearer_auth(token);
        }
        if !call.query.is_empty() {
            request = request.query(&call.query);
        }
        if let Some(body) = &call.body {
            request = request.json(body);
        }

        tracing::debug!(method = %call.method, path = %call.path, "API request");
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: message_from_body(&body, call.fallback),
            });
        }
        Ok(body.to_vec())
    }
}
