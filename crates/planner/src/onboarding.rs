//! First-run flow: Create Event -> Set Budget -> Style Quiz -> Complete.
//!
//! The sequence is fixed. Once the event exists the user can no longer
//! back out: the budget and quiz modals ignore backdrop clicks and have no
//! cancel control, and finishing the budget always opens the quiz.

use mywedding_core::event::Event;
use mywedding_core::onboarding::{validate_step_transition, OnboardingStep};
use mywedding_core::style_quiz::StylePreferences;
use mywedding_core::types::EntityId;

use crate::context::{PlannerContext, Scope};
use crate::error::PlannerError;
use crate::forms::{CreateEventForm, QuizProgress, SetBudgetForm, StyleQuiz};
use crate::refresh::{RefreshSignal, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingState {
    Step(OnboardingStep),
    Complete,
    Cancelled,
}

#[derive(Debug)]
pub struct OnboardingFlow {
    scope: Scope,
    state: OnboardingState,
    event_id: Option<EntityId>,
    event_name: String,
    create: CreateEventForm,
    budget: SetBudgetForm,
    quiz: StyleQuiz,
}

impl OnboardingFlow {
    /// Start from scratch with the "Create Event" modal open.
    pub fn new(ctx: &PlannerContext) -> Self {
        let mut create = CreateEventForm::new();
        create.open();
        Self {
            scope: ctx.scope(),
            state: OnboardingState::Step(OnboardingStep::CreateEvent),
            event_id: None,
            event_name: String::new(),
            create,
            budget: SetBudgetForm::new(),
            quiz: StyleQuiz::new(),
        }
    }

    /// Pick up an existing event at the first step it has not completed.
    pub fn resume(ctx: &PlannerContext, event: &Event) -> Self {
        let mut flow = Self::new(ctx);
        flow.create.close();
        flow.event_id = Some(event.id.clone());
        flow.event_name = event.event_name.clone();

        let has_style = matches!(
            StylePreferences::parse(event.style_preferences.as_deref()),
            Ok(Some(_))
        );
        if !event.has_budget() {
            flow.enter(OnboardingStep::SetBudget);
        } else if !has_style {
            flow.enter(OnboardingStep::StyleQuiz);
        } else {
            flow.state = OnboardingState::Complete;
        }
        flow
    }

    pub fn state(&self) -> OnboardingState {
        self.state
    }

    pub fn step(&self) -> Option<OnboardingStep> {
        match self.state {
            OnboardingState::Step(step) => Some(step),
            _ => None,
        }
    }

    pub fn event_id(&self) -> Option<&str> {
        self.event_id.as_deref()
    }

    /// Heading of the budget modal.
    pub fn welcome_title(&self) -> String {
        format!("Welcome to \"{}\"!", self.event_name)
    }

    pub fn create_form(&self) -> &CreateEventForm {
        &self.create
    }

    pub fn create_form_mut(&mut self) -> &mut CreateEventForm {
        &mut self.create
    }

    pub fn budget_form(&self) -> &SetBudgetForm {
        &self.budget
    }

    pub fn budget_form_mut(&mut self) -> &mut SetBudgetForm {
        &mut self.budget
    }

    pub fn quiz(&self) -> &StyleQuiz {
        &self.quiz
    }

    /// Step 1: create the event, then open the budget modal.
    pub async fn submit_event(&mut self) -> Result<EntityId, PlannerError> {
        self.require_step(OnboardingStep::CreateEvent)?;
        let name = self.create.event_name.trim().to_string();
        let created = self.create.submit(&self.scope).await?;

        self.event_id = Some(created.event_id.clone());
        self.event_name = name;
        self.advance(OnboardingStep::SetBudget)?;
        Ok(created.event_id)
    }

    /// Step 2: save the budget, then always open the quiz.
    pub async fn submit_budget(&mut self) -> Result<(), PlannerError> {
        self.require_step(OnboardingStep::SetBudget)?;
        let event_id = self.current_event()?;
        self.budget.submit(&self.scope, &event_id).await?;
        self.advance(OnboardingStep::StyleQuiz)
    }

    /// Step 3: answer the current quiz question. The last answer saves the
    /// preferences and completes the flow.
    pub async fn answer_quiz(&mut self, value: &str) -> Result<QuizProgress, PlannerError> {
        self.require_step(OnboardingStep::StyleQuiz)?;
        let event_id = self.current_event()?;
        let progress = self.quiz.select(&self.scope, &event_id, value).await?;
        if progress == QuizProgress::Submitted {
            self.state = OnboardingState::Complete;
            tracing::info!(event_id = %event_id, "Onboarding complete");
            self.scope.notify(RefreshSignal::global(Resource::Events));
        }
        Ok(progress)
    }

    /// Close control. Only honoured before the event exists.
    pub fn cancel(&mut self) -> bool {
        match self.state {
            OnboardingState::Step(step) if step.is_cancellable() => {
                self.create.close();
                self.state = OnboardingState::Cancelled;
                true
            }
            _ => false,
        }
    }

    /// Backdrop click on whichever modal is showing.
    pub fn dismiss_backdrop(&mut self) -> bool {
        match self.state {
            OnboardingState::Step(OnboardingStep::CreateEvent) => {
                if self.create.dismiss_backdrop() {
                    self.state = OnboardingState::Cancelled;
                    return true;
                }
                false
            }
            OnboardingState::Step(OnboardingStep::SetBudget) => self.budget.dismiss_backdrop(),
            OnboardingState::Step(OnboardingStep::StyleQuiz) => self.quiz.dismiss_backdrop(),
            _ => false,
        }
    }

    fn require_step(&self, step: OnboardingStep) -> Result<(), PlannerError> {
        if self.step() == Some(step) {
            return Ok(());
        }
        Err(PlannerError::Validation(format!(
            "Onboarding is not at the '{}' step.",
            step.label()
        )))
    }

    fn current_event(&self) -> Result<EntityId, PlannerError> {
        self.event_id
            .clone()
            .ok_or_else(|| PlannerError::Validation("No event has been created yet.".into()))
    }

    fn advance(&mut self, next: OnboardingStep) -> Result<(), PlannerError> {
        if let Some(current) = self.step() {
            validate_step_transition(current, next)?;
        }
        self.enter(next);
        Ok(())
    }

    fn enter(&mut self, step: OnboardingStep) {
        tracing::debug!(step = step.label(), "Onboarding step");
        match step {
            OnboardingStep::CreateEvent => self.create.open(),
            OnboardingStep::SetBudget => self.budget.open(),
            OnboardingStep::StyleQuiz => self.quiz.open(),
        }
        self.state = OnboardingState::Step(step);
    }
}
