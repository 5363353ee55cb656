//! Collaboration hub: the slide-over panel with chat channels and polls.

use chrono::Utc;
use mywedding_core::chat::{Conversation, Message, NewMessage};
use mywedding_core::types::EntityId;
use uuid::Uuid;

use crate::context::{PlannerContext, Scope};
use crate::error::PlannerError;
use crate::sections::PollsSection;
use crate::state::Loadable;
use crate::store::UiStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HubTab {
    #[default]
    Messages,
    Polls,
}

#[derive(Debug)]
pub struct CollaborationHub {
    scope: Scope,
    ui: UiStore,
    event_id: EntityId,
    tab: HubTab,
    conversations: Loadable<Vec<Conversation>>,
    selected: Option<Conversation>,
    messages: Loadable<Vec<Message>>,
    /// Composer text for the selected channel.
    pub draft: String,
    polls: PollsSection,
}

impl CollaborationHub {
    pub fn new(ctx: &PlannerContext, event_id: impl Into<EntityId>) -> Self {
        let event_id = event_id.into();
        Self {
            scope: ctx.scope(),
            ui: ctx.ui.clone(),
            polls: PollsSection::new(ctx, event_id.clone()),
            event_id,
            tab: HubTab::Messages,
            conversations: Loadable::Loading,
            selected: None,
            messages: Loadable::Loading,
            draft: String::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.ui.is_hub_open()
    }

    pub fn tab(&self) -> HubTab {
        self.tab
    }

    pub fn conversations(&self) -> &Loadable<Vec<Conversation>> {
        &self.conversations
    }

    pub fn selected(&self) -> Option<&Conversation> {
        self.selected.as_ref()
    }

    /// Header of the message pane.
    pub fn channel_title(&self) -> &str {
        self.selected.as_ref().map_or("Loading...", |c| c.name.as_str())
    }

    pub fn messages(&self) -> &Loadable<Vec<Message>> {
        &self.messages
    }

    pub fn polls(&self) -> &PollsSection {
        &self.polls
    }

    pub fn polls_mut(&mut self) -> &mut PollsSection {
        &mut self.polls
    }

    /// Open the panel, load channels and show the first one by default.
    pub async fn open(&mut self) {
        self.ui.open_hub();
        if !self.scope.is_signed_in() {
            return;
        }
        self.refresh_conversations().await;
        if self.selected.is_none() {
            if let Some(first) = self.conversations.data().and_then(|c| c.first()).cloned() {
                self.selected = Some(first);
            }
        }
        self.refresh_messages().await;
    }

    pub fn close(&mut self) {
        self.ui.close_hub();
    }

    pub async fn select_tab(&mut self, tab: HubTab) {
        self.tab = tab;
        if tab == HubTab::Polls && self.polls.polls().is_loading() {
            self.polls.mount().await;
        }
    }

    /// Refetch the polls tab, unless it was never opened.
    pub async fn refresh_polls(&mut self) {
        if !self.polls.polls().is_loading() {
            self.polls.refresh().await;
        }
    }

    /// Switch channel and load its messages.
    pub async fn select_channel(&mut self, conversation_id: &str) -> Result<(), PlannerError> {
        let conversation = self
            .conversations
            .data()
            .and_then(|list| list.iter().find(|c| c.id == conversation_id))
            .cloned()
            .ok_or_else(|| PlannerError::NotFound("That channel does not exist.".into()))?;
        self.selected = Some(conversation);
        self.refresh_messages().await;
        Ok(())
    }

    async fn refresh_conversations(&mut self) {
        let (scope, event_id) = (&self.scope, self.event_id.as_str());
        self.conversations
            .load(async {
                let token = scope.token().await?;
                Ok(scope.api().get_conversations(&token, event_id).await?)
            })
            .await;
    }

    async fn refresh_messages(&mut self) {
        let Some(conversation_id) = self.selected.as_ref().map(|c| c.id.clone()) else {
            return;
        };
        let scope = &self.scope;
        self.messages
            .load(async {
                let token = scope.token().await?;
                Ok(scope.api().get_messages(&token, &conversation_id).await?)
            })
            .await;
    }

    /// Send the draft to the selected channel.
    ///
    /// Blank drafts are ignored (`Ok(false)`). After the post succeeds a
    /// temporary message is appended so the sender sees it at once, then
    /// the list is replaced by a refetch.
    pub async fn send_message(&mut self) -> Result<bool, PlannerError> {
        if self.draft.trim().is_empty() {
            return Ok(false);
        }
        let Some(user) = self.scope.auth().user() else {
            return Ok(false);
        };
        let Some(conversation_id) = self.selected.as_ref().map(|c| c.id.clone()) else {
            return Ok(false);
        };
        let body = NewMessage::from_text(&self.draft)?;

        let token = self.scope.token().await?;
        self.scope
            .api()
            .post_message(&token, &conversation_id, &body)
            .await?;
        self.draft.clear();

        if let Some(list) = self.messages.data_mut() {
            list.push(Message {
                id: Uuid::new_v4().to_string(),
                content: body.content.clone(),
                sender_id: user.id.clone(),
                sender_first_name: user.first_name().to_string(),
                sender_last_name: String::new(),
                created_at: Utc::now(),
                attachment: None,
            });
        }
        self.refresh_messages().await;
        Ok(true)
    }
}
