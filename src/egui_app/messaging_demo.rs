//! Messaging Demo
//!
//! Seeds a short conversation and wires it to the conversation screen.

use chrono::{Duration as ChronoDuration, Utc};
use eframe::egui;
use uuid::Uuid;

use crate::egui_app::config::Config;
use crate::egui_app::messaging::main_layout::render_conversation_view;
use crate::egui_app::messaging::{ConversationState, InMemoryConversationStore, StaticIdentity};
use crate::shared::messaging::{ChatMessage, DeliveryStatus, ImageRef};

/// Demo screen state
pub struct MessagingDemo {
    pub state: ConversationState,
}

impl MessagingDemo {
    pub fn new(config: &Config) -> Self {
        let me = config.dev_user_id().unwrap_or_else(Uuid::new_v4);
        let store = InMemoryConversationStore::new().with_latency(config.store_latency());
        seed_conversation(&store, me, Uuid::new_v4());

        tracing::info!("[BUBBLE] Demo started as {}", me);
        Self {
            state: ConversationState::new(config.bubble().clone(), StaticIdentity(Some(me)), store),
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui) {
        render_conversation_view(ui, &mut self.state);
    }
}

/// Fill `store` with a conversation between `me` and `peer`
pub fn seed_conversation(store: &InMemoryConversationStore, me: Uuid, peer: Uuid) {
    let start = Utc::now() - ChronoDuration::minutes(30);
    let at = |minutes: i64, mut message: ChatMessage| {
        message.created_at = start + ChronoDuration::minutes(minutes);
        message
    };

    store.insert(at(0, ChatMessage::text(peer, "Are we still on for Friday?")));
    store.insert(at(2, ChatMessage::text(me, "Yes! 7pm works").with_status(DeliveryStatus::Read)));
    store.insert(at(
        3,
        ChatMessage::text(me, "I'll book the table").with_status(DeliveryStatus::Read).edited(),
    ));
    store.insert(at(
        10,
        ChatMessage::text(peer, "Here's the place").with_image(ImageRef {
            url: "https://example.com/restaurant.jpg".to_string(),
            alt: Some("Restaurant front".to_string()),
            width: Some(640),
            height: Some(480),
        }),
    ));
    store.insert(at(20, ChatMessage::text(me, "Looks great").with_status(DeliveryStatus::Delivered)));
    store.insert(at(29, ChatMessage::text(me, "See you there").with_status(DeliveryStatus::Sent)));
}
