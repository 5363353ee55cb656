//! Typed endpoint wrappers, one module per backend resource.
//!
//! Every wrapper issues exactly one logical request (`GET`s may be retried
//! by the client's policy) and performs no local caching.

pub mod activity;
pub mod auth;
pub mod budget;
pub mod chat;
pub mod events;
pub mod polls;
pub mod tasks;
pub mod team;
pub mod vendors;
