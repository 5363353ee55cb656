//! Event-planning sections.
//!
//! A section fetches its data on mount (only when a user is signed in),
//! exposes it as a [`crate::Loadable`], and refetches after each mutation
//! it performs. Each one owns a [`crate::Scope`], so dropping a section
//! cancels whatever it still has in flight.

pub mod activity;
pub mod budget;
pub mod checklist;
pub mod dashboard;
pub mod event_header;
pub mod polls;
pub mod style;
pub mod team;

pub use activity::ActivitySection;
pub use budget::BudgetSection;
pub use checklist::ChecklistSection;
pub use dashboard::Dashboard;
pub use event_header::EventHeader;
pub use polls::PollsSection;
pub use style::StyleSection;
pub use team::TeamSection;
