//! First-run event onboarding steps.
//!
//! A new event goes through three fixed steps: create the event, set its
//! total budget, then take the style quiz. The sequence is strictly linear
//! and cannot be skipped or abandoned once the event exists.

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    CreateEvent,
    SetBudget,
    StyleQuiz,
}

impl OnboardingStep {
    pub fn label(self) -> &'static str {
        match self {
            Self::CreateEvent => "Create Event",
            Self::SetBudget => "Set Budget",
            Self::StyleQuiz => "Style Quiz",
        }
    }

    /// The step that follows this one, `None` after the last.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::CreateEvent => Some(Self::SetBudget),
            Self::SetBudget => Some(Self::StyleQuiz),
            Self::StyleQuiz => None,
        }
    }

    /// Only the first step may be cancelled; later steps gate completion.
    pub fn is_cancellable(self) -> bool {
        self == Self::CreateEvent
    }
}

/// Validate a step transition: forward by exactly one step only.
pub fn validate_step_transition(current: OnboardingStep, next: OnboardingStep) -> Result<(), CoreError> {
    if current.next() == Some(next) {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "Cannot move from '{}' to '{}'. Onboarding only advances one step at a time.",
        current.label(),
        next.label()
    )))
}
