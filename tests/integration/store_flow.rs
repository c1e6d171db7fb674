//! Bubbles wired to the in-memory store through the conversation state

use crate::common::user;
use chat_bubble::egui_app::messaging::{
    BubbleAction, ConversationState, DeletePhase, InMemoryConversationStore, StaticIdentity,
};
use chat_bubble::shared::{BubbleConfig, ChatMessage};
use std::time::{Duration, Instant};

fn state(store: InMemoryConversationStore) -> ConversationState {
    ConversationState::new(BubbleConfig::default(), StaticIdentity(Some(user(1))), store)
}

#[test]
fn test_delayed_delete_resolves_on_later_frame() {
    let store = InMemoryConversationStore::new().with_latency(Duration::from_millis(30));
    let message = ChatMessage::text(user(1), "slow");
    store.insert(message.clone());
    let mut state = state(store);
    state.views();

    state.dispatch(&message, BubbleAction::ToggleMenu);
    state.dispatch(&message, BubbleAction::Delete);
    state.dispatch(&message, BubbleAction::AnimationComplete);
    assert_eq!(state.bubble(message.id).map(|b| b.delete_phase()), Some(DeletePhase::Committing));

    let deadline = Instant::now() + Duration::from_secs(5);
    while state.store.contains(message.id) && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert!(!state.store.contains(message.id));

    assert!(state.views().is_empty());
    assert_eq!(state.bubble_count(), 0);
    assert!(state.toasts.is_empty());
}

#[test]
fn test_rejected_delete_keeps_message_and_notifies() {
    let store = InMemoryConversationStore::new();
    let message = ChatMessage::text(user(1), "stays");
    store.insert(message.clone());
    store.fail_next_delete();
    let mut state = state(store);
    state.views();

    state.dispatch(&message, BubbleAction::ToggleMenu);
    state.dispatch(&message, BubbleAction::Delete);
    state.dispatch(&message, BubbleAction::AnimationComplete);

    let views = state.views();
    assert_eq!(views.len(), 1);
    assert!(!views[0].1.deleting);
    assert_eq!(state.toasts.messages(), vec!["Failed to delete message".to_string()]);
}

#[test]
fn test_other_bubbles_unaffected_by_delete() {
    let store = InMemoryConversationStore::new();
    let keep = ChatMessage::text(user(1), "keep");
    let gone = ChatMessage::text(user(1), "gone");
    store.insert(keep.clone());
    store.insert(gone.clone());
    let mut state = state(store);
    state.views();

    state.dispatch(&keep, BubbleAction::ToggleMenu);
    state.dispatch(&gone, BubbleAction::ToggleMenu);
    state.dispatch(&gone, BubbleAction::Delete);
    state.dispatch(&gone, BubbleAction::AnimationComplete);

    let views = state.views();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].0.id, keep.id);
    assert!(views[0].1.menu.unwrap().open);
}
