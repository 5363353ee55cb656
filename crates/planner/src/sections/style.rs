use mywedding_core::style_quiz::StylePreferences;
use mywedding_core::types::EntityId;

use crate::context::{PlannerContext, Scope};
use crate::error::PlannerError;
use crate::forms::{QuizProgress, StyleQuiz};
use crate::state::Loadable;

/// What the "My Style" card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleView {
    Loading,
    Failed(String),
    /// No answers stored yet; invite the user to take the quiz.
    Prompt,
    /// `(question, answer)` rows.
    Summary(Vec<(String, String)>),
}

/// The event's style preferences and the quiz that sets them.
#[derive(Debug)]
pub struct StyleSection {
    scope: Scope,
    event_id: EntityId,
    preferences: Loadable<Option<StylePreferences>>,
    quiz: StyleQuiz,
}

impl StyleSection {
    pub fn new(ctx: &PlannerContext, event_id: impl Into<EntityId>) -> Self {
        Self {
            scope: ctx.scope(),
            event_id: event_id.into(),
            preferences: Loadable::Loading,
            quiz: StyleQuiz::new(),
        }
    }

    pub fn preferences(&self) -> &Loadable<Option<StylePreferences>> {
        &self.preferences
    }

    pub fn quiz(&self) -> &StyleQuiz {
        &self.quiz
    }

    pub async fn mount(&mut self) {
        if !self.scope.is_signed_in() {
            return;
        }
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        let (scope, event_id) = (&self.scope, self.event_id.as_str());
        self.preferences
            .load(async {
                let token = scope.token().await?;
                let event = scope.api().get_event_by_id(&token, event_id).await?;
                let raw = event.as_ref().and_then(|e| e.style_preferences.as_deref());
                Ok(StylePreferences::parse(raw)?)
            })
            .await;
    }

    pub fn view(&self) -> StyleView {
        match &self.preferences {
            Loadable::Loading => StyleView::Loading,
            Loadable::Failed(msg) => StyleView::Failed(msg.clone()),
            Loadable::Ready(None) => StyleView::Prompt,
            Loadable::Ready(Some(prefs)) => StyleView::Summary(prefs.summary()),
        }
    }

    pub fn open_quiz(&mut self) {
        self.quiz.open();
    }

    /// Answer the current quiz question; refetch once the quiz is saved.
    pub async fn answer(&mut self, value: &str) -> Result<QuizProgress, PlannerError> {
        let progress = self.quiz.select(&self.scope, &self.event_id, value).await?;
        if progress == QuizProgress::Submitted {
            self.refresh().await;
        }
        Ok(progress)
    }
}
