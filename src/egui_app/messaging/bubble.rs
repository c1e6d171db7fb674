//! Message Bubble State
//!
//! Headless controller behind one rendered message. It owns the ephemeral UI
//! state (menu and deletion) and turns it into a [`BubbleView`] each frame. The
//! egui component in `components::message_bubble` only draws that view and
//! feeds back [`BubbleAction`]s.
//!
//! A `MessageBubble` is created for one message id and dropped when that
//! message leaves the list.

use super::action_menu::{ActionMenu, MenuCommand, MenuEvent};
use super::delete_sequencer::{DeletePhase, DeleteSequencer};
use super::ownership::is_owner;
use super::ports::BubbleContext;
use super::status_presenter::{present_for, StatusBadge};
use crate::shared::config::BubbleConfig;
use crate::shared::messaging::{ChatMessage, ImageRef};
use std::time::Duration;
use uuid::Uuid;

/// User or render-layer input to a bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleAction {
    ToggleMenu,
    Edit,
    Delete,
    Dismiss,
    /// The exit animation finished playing
    AnimationComplete,
}

/// Which side of the conversation the bubble sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Outgoing,
    Incoming,
}

/// Menu part of the view; present only for the author
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    pub open: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

/// Everything the render layer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleView {
    pub message_id: Uuid,
    pub alignment: Alignment,
    pub text: Option<String>,
    pub image: Option<ImageRef>,
    /// Neither text nor image
    pub empty: bool,
    pub time_label: String,
    pub edited: bool,
    pub status: Option<StatusBadge>,
    pub menu: Option<MenuView>,
    pub deleting: bool,
    pub exit_duration: Duration,
    pub max_width_ratio: f32,
}

/// Interaction state for one message
#[derive(Debug)]
pub struct MessageBubble {
    message_id: Uuid,
    config: BubbleConfig,
    menu: ActionMenu,
    delete: DeleteSequencer,
}

impl MessageBubble {
    pub fn new(message: &ChatMessage, config: BubbleConfig) -> Self {
        let delete = DeleteSequencer::new(message.id, config.delete_failed_text.clone());
        Self {
            message_id: message.id,
            config,
            menu: ActionMenu::new(),
            delete,
        }
    }

    pub fn message_id(&self) -> Uuid {
        self.message_id
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn is_deleting(&self) -> bool {
        self.delete.is_deleting()
    }

    pub fn delete_phase(&self) -> DeletePhase {
        self.delete.phase()
    }

    /// Build this frame's view.
    ///
    /// Ownership is resolved again on every call; a menu left open by a viewer
    /// who no longer owns the message is closed here. A pending delete reply is
    /// polled as well.
    pub fn view(&mut self, message: &ChatMessage, ctx: &BubbleContext<'_>) -> BubbleView {
        if message.id != self.message_id {
            tracing::warn!(
                "[BUBBLE] Bubble for {} rendered with message {}",
                self.message_id,
                message.id
            );
        }

        let owner = is_owner(message, ctx.identity.current_user_id());
        if !owner && self.menu.is_open() {
            self.menu.handle(MenuEvent::Dismiss);
        }

        self.delete.poll(ctx.notifier);
        let deleting = self.delete.is_deleting();

        let menu = owner.then(|| MenuView {
            open: self.menu.is_open(),
            can_edit: !deleting,
            can_delete: self.delete.phase() == DeletePhase::Idle,
        });

        BubbleView {
            message_id: message.id,
            alignment: if owner { Alignment::Outgoing } else { Alignment::Incoming },
            text: message.text.clone().filter(|t| !t.is_empty()),
            image: message.image.clone(),
            empty: !message.has_content(),
            time_label: ctx.clock.format(&message.created_at),
            edited: message.is_edited,
            status: present_for(message, owner),
            menu,
            deleting,
            exit_duration: self.config.exit_duration,
            max_width_ratio: self.config.max_width_ratio,
        }
    }

    /// Apply one action. Never fails; problems end up in the notifier.
    pub fn handle(&mut self, action: BubbleAction, message: &ChatMessage, ctx: &BubbleContext<'_>) {
        if action == BubbleAction::AnimationComplete {
            self.delete.animation_complete(ctx.store);
            return;
        }

        if !is_owner(message, ctx.identity.current_user_id()) {
            tracing::debug!("[BUBBLE] Ignoring {:?} on {} from non-author", action, self.message_id);
            if self.menu.is_open() {
                self.menu.handle(MenuEvent::Dismiss);
            }
            return;
        }

        let event = match action {
            BubbleAction::ToggleMenu if self.delete.is_deleting() => return,
            BubbleAction::ToggleMenu => MenuEvent::Toggle,
            BubbleAction::Edit => MenuEvent::SelectEdit,
            BubbleAction::Delete => MenuEvent::SelectDelete,
            BubbleAction::Dismiss => MenuEvent::Dismiss,
            BubbleAction::AnimationComplete => return,
        };

        match self.menu.handle(event) {
            Some(MenuCommand::Edit) => {
                tracing::info!("[BUBBLE] Handing {} to the store for editing", message.id);
                ctx.store.request_edit(message);
            }
            Some(MenuCommand::Delete) => {
                self.delete.begin(ctx.animation, ctx.notifier);
            }
            None => {}
        }
    }
}
