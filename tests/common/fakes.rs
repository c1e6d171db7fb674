//! Recording collaborators

use chat_bubble::egui_app::messaging::ports::CommitResult;
use chat_bubble::egui_app::messaging::{
    AnimationHost, BubbleContext, ConversationStore, IdentityProvider, PendingCommit,
    TimeFormatter, Toasts,
};
use chat_bubble::shared::{BubbleConfig, BubbleError, ChatMessage};
use chrono::{DateTime, Utc};
use std::cell::{Cell, RefCell};
use std::sync::mpsc::{channel, Sender};
use uuid::Uuid;

/// Identity that can resolve or change mid-test
#[derive(Default)]
pub struct SwitchableIdentity(Cell<Option<Uuid>>);

impl SwitchableIdentity {
    pub fn new(id: Option<Uuid>) -> Self {
        Self(Cell::new(id))
    }

    pub fn set(&self, id: Option<Uuid>) {
        self.0.set(id);
    }
}

impl IdentityProvider for SwitchableIdentity {
    fn current_user_id(&self) -> Option<Uuid> {
        self.0.get()
    }
}

/// Store that records every call and holds delete replies until resolved
#[derive(Default)]
pub struct RecordingStore {
    pub edits: RefCell<Vec<ChatMessage>>,
    pub deletes: RefCell<Vec<Uuid>>,
    replies: RefCell<Vec<Sender<CommitResult>>>,
}

impl RecordingStore {
    /// Answer every outstanding delete with `result`
    pub fn resolve_all(&self, result: CommitResult) {
        for reply in self.replies.borrow_mut().drain(..) {
            let _ = reply.send(result.clone());
        }
    }

    pub fn delete_calls(&self) -> Vec<Uuid> {
        self.deletes.borrow().clone()
    }
}

impl ConversationStore for RecordingStore {
    fn request_edit(&self, message: &ChatMessage) {
        self.edits.borrow_mut().push(message.clone());
    }

    fn commit_delete(&self, id: Uuid) -> PendingCommit {
        self.deletes.borrow_mut().push(id);
        let (tx, rx) = channel();
        self.replies.borrow_mut().push(tx);
        rx
    }
}

/// Animation host that counts starts and can be told to refuse
#[derive(Default)]
pub struct RecordingAnimation {
    pub starts: Cell<usize>,
    pub refuse: Cell<bool>,
}

impl AnimationHost for RecordingAnimation {
    fn start_exit(&self, _message_id: Uuid) -> Result<(), BubbleError> {
        if self.refuse.get() {
            return Err(BubbleError::animation("compositor unavailable"));
        }
        self.starts.set(self.starts.get() + 1);
        Ok(())
    }
}

/// Formatter that renders UTC so labels do not depend on the host timezone
pub struct UtcClock;

impl TimeFormatter for UtcClock {
    fn format(&self, timestamp: &DateTime<Utc>) -> String {
        timestamp.format("%H:%M UTC").to_string()
    }
}

/// All collaborators of one bubble
pub struct Harness {
    pub identity: SwitchableIdentity,
    pub store: RecordingStore,
    pub toasts: Toasts,
    pub clock: UtcClock,
    pub animation: RecordingAnimation,
}

impl Harness {
    pub fn viewing_as(viewer: Option<Uuid>) -> Self {
        let config = BubbleConfig::default();
        Self {
            identity: SwitchableIdentity::new(viewer),
            store: RecordingStore::default(),
            toasts: Toasts::from_config(&config),
            clock: UtcClock,
            animation: RecordingAnimation::default(),
        }
    }

    pub fn ctx(&self) -> BubbleContext<'_> {
        BubbleContext {
            identity: &self.identity,
            store: &self.store,
            notifier: &self.toasts,
            clock: &self.clock,
            animation: &self.animation,
        }
    }
}

/// Fixed ids used by the scenario tests
pub fn user(n: u128) -> Uuid {
    Uuid::from_u128(n)
}
