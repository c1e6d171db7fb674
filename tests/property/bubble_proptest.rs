//! Property-based tests for bubble visibility and delete ordering

use crate::common::{user, Harness};
use chat_bubble::egui_app::messaging::{BubbleAction, MessageBubble, StatusIcon, Emphasis};
use chat_bubble::shared::{BubbleConfig, ChatMessage, DeliveryStatus};
use proptest::prelude::*;

fn status() -> impl Strategy<Value = Option<DeliveryStatus>> {
    prop_oneof![
        Just(None),
        Just(Some(DeliveryStatus::Sent)),
        Just(Some(DeliveryStatus::Delivered)),
        Just(Some(DeliveryStatus::Read)),
    ]
}

fn action() -> impl Strategy<Value = BubbleAction> {
    prop_oneof![
        Just(BubbleAction::ToggleMenu),
        Just(BubbleAction::Edit),
        Just(BubbleAction::Delete),
        Just(BubbleAction::Dismiss),
        Just(BubbleAction::AnimationComplete),
    ]
}

fn message(sender: u128, status: Option<DeliveryStatus>) -> ChatMessage {
    let mut message = ChatMessage::text(user(sender), "hi");
    message.status = status;
    message
}

proptest! {
    #[test]
    fn test_non_author_never_gets_controls(
        status in status(),
        actions in prop::collection::vec(action(), 0..24),
    ) {
        let h = Harness::viewing_as(Some(user(2)));
        let message = message(1, status);
        let mut bubble = MessageBubble::new(&message, BubbleConfig::default());

        for action in actions {
            bubble.handle(action, &message, &h.ctx());
            let view = bubble.view(&message, &h.ctx());
            prop_assert!(view.menu.is_none());
            prop_assert!(view.status.is_none());
        }
        prop_assert!(h.store.delete_calls().is_empty());
        prop_assert!(h.store.edits.borrow().is_empty());
    }

    #[test]
    fn test_author_badge_depends_only_on_status(
        status in status(),
        actions in prop::collection::vec(action(), 0..24),
    ) {
        let h = Harness::viewing_as(Some(user(1)));
        let message = message(1, status);
        let mut bubble = MessageBubble::new(&message, BubbleConfig::default());

        let expected = status.map(|s| match s {
            DeliveryStatus::Sent => (StatusIcon::SingleCheck, Emphasis::Muted),
            DeliveryStatus::Delivered => (StatusIcon::DoubleCheck, Emphasis::Muted),
            DeliveryStatus::Read => (StatusIcon::DoubleCheck, Emphasis::Accent),
        });

        for action in actions {
            bubble.handle(action, &message, &h.ctx());
            let view = bubble.view(&message, &h.ctx());
            prop_assert!(view.menu.is_some());
            prop_assert_eq!(view.status.map(|b| (b.icon, b.emphasis)), expected);
        }
    }

    #[test]
    fn test_commit_at_most_once_and_only_after_animation(
        actions in prop::collection::vec(action(), 0..32),
    ) {
        let h = Harness::viewing_as(Some(user(1)));
        let message = message(1, Some(DeliveryStatus::Sent));
        let mut bubble = MessageBubble::new(&message, BubbleConfig::default());

        let mut deleting_seen = false;
        for action in actions {
            let was_deleting = bubble.is_deleting();
            let calls_before = h.store.delete_calls().len();

            bubble.handle(action, &message, &h.ctx());

            if h.store.delete_calls().len() > calls_before {
                prop_assert_eq!(action, BubbleAction::AnimationComplete);
                prop_assert!(was_deleting);
            }
            if deleting_seen {
                prop_assert!(bubble.is_deleting());
            }
            deleting_seen |= bubble.is_deleting();
        }

        let calls = h.store.delete_calls();
        prop_assert!(calls.len() <= 1);
        prop_assert!(calls.iter().all(|id| *id == message.id));
        prop_assert!(h.animation.starts.get() <= 1);
    }
}
