//! Typed async client for the MyWedding REST backend.
//!
//! Wraps every endpoint the planner consumes with [`reqwest`]: bearer
//! authentication, `{message}` error extraction, bounded retry for `GET`s
//! and per-scope cancellation.

pub mod api;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod retry;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use retry::RetryPolicy;
