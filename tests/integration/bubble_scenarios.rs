//! End-to-end scenarios for a single bubble

use crate::common::{user, Harness};
use crate::{assert_badge, assert_no_author_controls};
use chat_bubble::egui_app::messaging::{Alignment, BubbleAction, MessageBubble};
use chat_bubble::shared::{BubbleConfig, ChatMessage, DeliveryStatus};
use pretty_assertions::assert_eq;

/// `{id: m1, sender: u1, text: "hi", status}` decoded from the backend shape
fn m1(status: &str) -> ChatMessage {
    let json = format!(
        r#"{{
            "id": "{}",
            "sender_id": "{}",
            "text": "hi",
            "created_at": "2024-01-15T10:30:00Z",
            "is_edited": false,
            "status": "{}"
        }}"#,
        user(0x6d31),
        user(1),
        status
    );
    ChatMessage::from_json(&json).unwrap()
}

#[test]
fn test_owner_sent_message_shows_single_muted_check_and_closed_menu() {
    let h = Harness::viewing_as(Some(user(1)));
    let message = m1("sent");
    let mut bubble = MessageBubble::new(&message, BubbleConfig::default());

    let view = bubble.view(&message, &h.ctx());
    assert_badge!(view, SingleCheck, Muted);
    assert_eq!(view.alignment, Alignment::Outgoing);
    assert_eq!(view.text.as_deref(), Some("hi"));
    assert!(!view.menu.unwrap().open);

    bubble.handle(BubbleAction::ToggleMenu, &message, &h.ctx());
    assert!(bubble.view(&message, &h.ctx()).menu.unwrap().open);
}

#[test]
fn test_owner_read_message_shows_accent_double_check() {
    let h = Harness::viewing_as(Some(user(1)));
    let message = m1("read");
    let mut bubble = MessageBubble::new(&message, BubbleConfig::default());

    assert_badge!(bubble.view(&message, &h.ctx()), DoubleCheck, Accent);
}

#[test]
fn test_owner_delivered_message_shows_muted_double_check() {
    let h = Harness::viewing_as(Some(user(1)));
    let message = m1("delivered");
    let mut bubble = MessageBubble::new(&message, BubbleConfig::default());

    assert_badge!(bubble.view(&message, &h.ctx()), DoubleCheck, Muted);
}

#[test]
fn test_owner_unknown_status_shows_nothing() {
    let h = Harness::viewing_as(Some(user(1)));
    let message = m1("queued");
    let mut bubble = MessageBubble::new(&message, BubbleConfig::default());

    let view = bubble.view(&message, &h.ctx());
    assert_badge!(view, None);
    assert!(view.menu.is_some());
}

#[test]
fn test_non_owner_never_sees_menu_or_status() {
    let h = Harness::viewing_as(Some(user(2)));

    for status in ["sent", "delivered", "read", "queued"] {
        let message = m1(status);
        let mut bubble = MessageBubble::new(&message, BubbleConfig::default());

        assert_no_author_controls!(bubble.view(&message, &h.ctx()));

        bubble.handle(BubbleAction::ToggleMenu, &message, &h.ctx());
        bubble.handle(BubbleAction::Delete, &message, &h.ctx());
        bubble.handle(BubbleAction::Edit, &message, &h.ctx());

        let view = bubble.view(&message, &h.ctx());
        assert_no_author_controls!(view);
        assert!(!view.deleting);
    }

    assert!(h.store.edits.borrow().is_empty());
    assert!(h.store.delete_calls().is_empty());
    assert_eq!(h.animation.starts.get(), 0);
}

#[test]
fn test_controls_appear_once_identity_resolves() {
    let h = Harness::viewing_as(None);
    let message = m1("sent");
    let mut bubble = MessageBubble::new(&message, BubbleConfig::default());

    assert_no_author_controls!(bubble.view(&message, &h.ctx()));

    h.identity.set(Some(user(1)));
    let view = bubble.view(&message, &h.ctx());
    assert!(view.menu.is_some());
    assert_badge!(view, SingleCheck, Muted);
}

#[test]
fn test_open_menu_closes_when_viewer_changes() {
    let h = Harness::viewing_as(Some(user(1)));
    let message = m1("sent");
    let mut bubble = MessageBubble::new(&message, BubbleConfig::default());
    bubble.handle(BubbleAction::ToggleMenu, &message, &h.ctx());
    assert!(bubble.is_menu_open());

    h.identity.set(Some(user(2)));
    assert_no_author_controls!(bubble.view(&message, &h.ctx()));
    assert!(!bubble.is_menu_open());

    // Switching back does not resurrect the old menu
    h.identity.set(Some(user(1)));
    assert!(!bubble.view(&message, &h.ctx()).menu.unwrap().open);
}

#[test]
fn test_edit_closes_menu_and_hands_over_current_message() {
    let h = Harness::viewing_as(Some(user(1)));
    let first = m1("sent");
    let mut bubble = MessageBubble::new(&first, BubbleConfig::default());

    // The list re-rendered with fresher fields since the bubble mounted
    let mut current = first.clone();
    current.text = Some("hi there".to_string());
    current.status = Some(DeliveryStatus::Read);

    bubble.handle(BubbleAction::ToggleMenu, &current, &h.ctx());
    bubble.handle(BubbleAction::Edit, &current, &h.ctx());

    assert!(!bubble.is_menu_open());
    assert_eq!(h.store.edits.borrow().as_slice(), &[current]);
    assert!(!bubble.is_deleting());
}

#[test]
fn test_edit_without_open_menu_does_nothing() {
    let h = Harness::viewing_as(Some(user(1)));
    let message = m1("sent");
    let mut bubble = MessageBubble::new(&message, BubbleConfig::default());

    bubble.handle(BubbleAction::Edit, &message, &h.ctx());
    assert!(h.store.edits.borrow().is_empty());
}

#[test]
fn test_time_label_uses_formatter() {
    let h = Harness::viewing_as(Some(user(2)));
    let message = m1("sent");
    let mut bubble = MessageBubble::new(&message, BubbleConfig::default());

    let view = bubble.view(&message, &h.ctx());
    assert_eq!(view.time_label, "10:30 UTC");
}
