//! Modal form controllers.
//!
//! Each form owns its raw field values (bound by the renderer), validates
//! them locally, issues exactly one API call on submit, and keeps the
//! modal open with an inline error when that call fails.

pub mod add_expense;
pub mod booking;
pub mod create_event;
pub mod create_task;
pub mod invite_member;
pub mod service;
pub mod set_budget;
pub mod style_quiz;

pub use add_expense::AddExpenseForm;
pub use booking::BookingForm;
pub use create_event::CreateEventForm;
pub use create_task::CreateTaskForm;
pub use invite_member::InviteMemberForm;
pub use service::ServiceForm;
pub use set_budget::SetBudgetForm;
pub use style_quiz::{QuizProgress, StyleQuiz};
