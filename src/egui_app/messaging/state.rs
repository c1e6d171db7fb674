//! Conversation State
//!
//! State for the demo conversation screen: the collaborators every bubble is
//! wired to, one `MessageBubble` per visible message, and the edit panel.

use super::bubble::{BubbleAction, BubbleView, MessageBubble};
use super::ports::{
    BubbleContext, ClockFormatter, ImmediateAnimation, NotificationSink, StaticIdentity, Toasts,
};
use super::store::InMemoryConversationStore;
use crate::shared::config::BubbleConfig;
use crate::shared::messaging::ChatMessage;
use std::collections::HashMap;
use uuid::Uuid;

/// The main state for the conversation screen
pub struct ConversationState {
    pub config: BubbleConfig,
    pub identity: StaticIdentity,
    pub store: InMemoryConversationStore,
    pub toasts: Toasts,
    pub clock: ClockFormatter,
    pub animation: ImmediateAnimation,

    /// Bubble state keyed by message id
    bubbles: HashMap<Uuid, MessageBubble>,

    /// Edit panel text
    pub edit_input: String,
    /// Message currently loaded into the edit panel
    editing_id: Option<Uuid>,
}

impl ConversationState {
    pub fn new(config: BubbleConfig, identity: StaticIdentity, store: InMemoryConversationStore) -> Self {
        Self {
            toasts: Toasts::from_config(&config),
            clock: ClockFormatter::from_config(&config),
            animation: ImmediateAnimation,
            config,
            identity,
            store,
            bubbles: HashMap::new(),
            edit_input: String::new(),
            editing_id: None,
        }
    }

    /// Number of mounted bubbles
    pub fn bubble_count(&self) -> usize {
        self.bubbles.len()
    }

    pub fn bubble(&self, id: Uuid) -> Option<&MessageBubble> {
        self.bubbles.get(&id)
    }

    /// Build views for every message in the store.
    ///
    /// Bubbles whose message left the store are dropped; new messages get fresh
    /// state.
    pub fn views(&mut self) -> Vec<(ChatMessage, BubbleView)> {
        let messages = self.store.messages();

        let before = self.bubbles.len();
        self.bubbles.retain(|id, _| messages.iter().any(|m| m.id == *id));
        if self.bubbles.len() != before {
            tracing::debug!("[BUBBLE] Unmounted {} bubble(s)", before - self.bubbles.len());
        }

        let ctx = BubbleContext {
            identity: &self.identity,
            store: &self.store,
            notifier: &self.toasts,
            clock: &self.clock,
            animation: &self.animation,
        };

        messages
            .into_iter()
            .map(|message| {
                let bubble = self
                    .bubbles
                    .entry(message.id)
                    .or_insert_with(|| MessageBubble::new(&message, self.config.clone()));
                let view = bubble.view(&message, &ctx);
                (message, view)
            })
            .collect()
    }

    /// Route an action to the bubble of `message`
    pub fn dispatch(&mut self, message: &ChatMessage, action: BubbleAction) {
        let ctx = BubbleContext {
            identity: &self.identity,
            store: &self.store,
            notifier: &self.toasts,
            clock: &self.clock,
            animation: &self.animation,
        };

        match self.bubbles.get_mut(&message.id) {
            Some(bubble) => bubble.handle(action, message, &ctx),
            None => tracing::warn!("[BUBBLE] No bubble mounted for {}", message.id),
        }
    }

    /// Load a newly requested edit into the panel. Returns the message being edited.
    pub fn sync_edit(&mut self) -> Option<ChatMessage> {
        let target = self.store.edit_target();
        let target_id = target.as_ref().map(|m| m.id);
        if target_id != self.editing_id {
            self.editing_id = target_id;
            self.edit_input = target
                .as_ref()
                .and_then(|m| m.text.clone())
                .unwrap_or_default();
        }
        target
    }

    /// Save the edit panel into the store
    pub fn save_edit(&mut self) {
        let Some(id) = self.editing_id.take() else {
            return;
        };
        let text = std::mem::take(&mut self.edit_input);
        if let Err(e) = self.store.apply_edit(id, text) {
            tracing::error!("[BUBBLE] Failed to save edit: {}", e);
            self.toasts.report_error("Failed to edit message");
        }
    }

    pub fn cancel_edit(&mut self) {
        self.store.cancel_edit();
        self.editing_id = None;
        self.edit_input.clear();
    }
}
