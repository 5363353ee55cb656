//! Client-state layer for the MyWedding planner.
//!
//! Everything a renderer needs to drive the planning screens without owning
//! any business logic: process-wide auth and UI stores, section state
//! machines that fetch on mount and refetch after every mutation, modal
//! form controllers, the first-run onboarding flow and the collaboration
//! hub. All data lives on the backend; nothing here caches.

pub mod context;
pub mod error;
pub mod form;
pub mod forms;
pub mod hub;
pub mod invitation;
pub mod onboarding;
pub mod refresh;
pub mod sections;
pub mod state;
pub mod store;
pub mod token;
pub mod vendors;
pub mod workspace;

pub use context::{PlannerContext, Scope};
pub use error::PlannerError;
pub use state::Loadable;
