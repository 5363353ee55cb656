use mywedding_core::style_quiz::{QuizQuestion, StylePreferences, UpdatePreferences, QUIZ_QUESTIONS};

use crate::context::Scope;
use crate::error::PlannerError;
use crate::form::{Backdrop, FormState};
use crate::refresh::{RefreshSignal, Resource};

/// Result of answering one quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizProgress {
    /// Moved on to the question at this index.
    Next(usize),
    /// The last answer was given and the preferences were saved.
    Submitted,
}

/// Style quiz modal. One question at a time; answering the last one saves.
#[derive(Debug, Clone)]
pub struct StyleQuiz {
    step: usize,
    answers: StylePreferences,
    state: FormState,
}

impl Default for StyleQuiz {
    fn default() -> Self {
        Self {
            step: 0,
            answers: StylePreferences::new(),
            state: FormState::new(Backdrop::Locked),
        }
    }
}

impl StyleQuiz {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn open(&mut self) {
        self.step = 0;
        self.answers = StylePreferences::new();
        self.state.open();
    }

    pub fn dismiss_backdrop(&mut self) -> bool {
        self.state.dismiss_backdrop()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn current_question(&self) -> &'static QuizQuestion {
        &QUIZ_QUESTIONS[self.step.min(QUIZ_QUESTIONS.len() - 1)]
    }

    pub fn answers(&self) -> &StylePreferences {
        &self.answers
    }

    /// Progress bar fill, 1-based so the first question shows partial fill.
    pub fn progress_percent(&self) -> u32 {
        ((self.step + 1) * 100 / QUIZ_QUESTIONS.len()) as u32
    }

    /// Record an answer for the current question.
    pub async fn select(
        &mut self,
        scope: &Scope,
        event_id: &str,
        value: &str,
    ) -> Result<QuizProgress, PlannerError> {
        let question = self.current_question();
        if question.option(value).is_none() {
            return Err(PlannerError::Validation(format!(
                "'{value}' is not an answer to \"{}\".",
                question.question
            )));
        }
        self.answers.set(question.key, value);

        if self.step + 1 < QUIZ_QUESTIONS.len() {
            self.step += 1;
            return Ok(QuizProgress::Next(self.step));
        }

        let answers = &self.answers;
        self.state
            .submit_with(async {
                let body = UpdatePreferences::from_preferences(answers)?;
                let token = scope.token().await?;
                scope.api().set_event_preferences(&token, event_id, &body).await?;
                tracing::info!(event_id, answers = answers.len(), "Style preferences saved");
                scope.notify(RefreshSignal::event(event_id, Resource::Preferences));
                Ok(QuizProgress::Submitted)
            })
            .await
    }
}
