//! Domain types and client-side validation for the MyWedding planner.
//!
//! Every entity here is owned by the backend; these types are transient,
//! unvalidated mirrors of its JSON payloads plus the request DTOs the
//! client sends. No I/O happens in this crate.

pub mod activity;
pub mod budget;
pub mod chat;
pub mod error;
pub mod event;
pub mod onboarding;
pub mod organizer;
pub mod poll;
pub mod style_quiz;
pub mod task;
pub mod types;
pub mod validation;
pub mod vendor;
