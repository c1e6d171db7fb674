//! Bubble Collaborators
//!
//! The bubble never reaches into process-wide state. Everything it talks to is
//! handed in through these traits, bundled per frame in [`BubbleContext`].

use crate::shared::config::BubbleConfig;
use crate::shared::error::BubbleError;
use crate::shared::messaging::ChatMessage;
use chrono::{DateTime, Local, Utc};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::mpsc::Receiver;
use uuid::Uuid;

/// Result of a store-level delete
pub type CommitResult = Result<(), BubbleError>;

/// Reply channel for an in-flight delete, polled once per frame
pub type PendingCommit = Receiver<CommitResult>;

/// Supplies the signed-in user. `None` while identity is still loading.
pub trait IdentityProvider {
    fn current_user_id(&self) -> Option<Uuid>;
}

/// Owner of the canonical message list
pub trait ConversationStore {
    /// Hand the message over for editing. Fire-and-forget.
    fn request_edit(&self, message: &ChatMessage);

    /// Remove the message. The result arrives on the returned channel.
    fn commit_delete(&self, id: Uuid) -> PendingCommit;
}

/// Surfaces transient, user-visible errors
pub trait NotificationSink {
    fn report_error(&self, message: &str);
}

/// Turns a timestamp into a display string
pub trait TimeFormatter {
    fn format(&self, timestamp: &DateTime<Utc>) -> String;
}

/// Render layer hook that plays the removal transition.
///
/// Completion comes back to the bubble as `BubbleAction::AnimationComplete`.
pub trait AnimationHost {
    fn start_exit(&self, message_id: Uuid) -> Result<(), BubbleError>;
}

/// Per-frame bundle of collaborator handles
#[derive(Clone, Copy)]
pub struct BubbleContext<'a> {
    pub identity: &'a dyn IdentityProvider,
    pub store: &'a dyn ConversationStore,
    pub notifier: &'a dyn NotificationSink,
    pub clock: &'a dyn TimeFormatter,
    pub animation: &'a dyn AnimationHost,
}

/// Identity fixed at construction
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticIdentity(pub Option<Uuid>);

impl IdentityProvider for StaticIdentity {
    fn current_user_id(&self) -> Option<Uuid> {
        self.0
    }
}

/// chrono-backed formatter rendering in local time
#[derive(Debug, Clone)]
pub struct ClockFormatter {
    pattern: String,
}

impl ClockFormatter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self { pattern: pattern.into() }
    }

    pub fn from_config(config: &BubbleConfig) -> Self {
        Self::new(config.time_format.clone())
    }
}

impl TimeFormatter for ClockFormatter {
    fn format(&self, timestamp: &DateTime<Utc>) -> String {
        timestamp.with_timezone(&Local).format(&self.pattern).to_string()
    }
}

/// A user-facing notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

/// Bounded notification queue for a single-threaded UI.
///
/// Oldest entries are dropped once `capacity` is reached.
#[derive(Debug)]
pub struct Toasts {
    entries: RefCell<VecDeque<Toast>>,
    capacity: usize,
}

impl Toasts {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RefCell::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
        }
    }

    pub fn from_config(config: &BubbleConfig) -> Self {
        Self::new(config.toast_capacity)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Snapshot of the current messages, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.entries.borrow().iter().map(|t| t.message.clone()).collect()
    }

    /// Remove and return every pending toast
    pub fn drain(&self) -> Vec<Toast> {
        self.entries.borrow_mut().drain(..).collect()
    }

    /// Drop toasts older than `max_age_seconds`
    pub fn expire(&self, max_age_seconds: i64) {
        let cutoff = Utc::now() - chrono::Duration::seconds(max_age_seconds);
        self.entries.borrow_mut().retain(|t| t.raised_at > cutoff);
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::from_config(&BubbleConfig::default())
    }
}

impl NotificationSink for Toasts {
    fn report_error(&self, message: &str) {
        tracing::warn!("[BUBBLE] Notifying user: {}", message);
        let mut entries = self.entries.borrow_mut();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(Toast {
            message: message.to_string(),
            raised_at: Utc::now(),
        });
    }
}

/// Animation host for render layers that drive the fade themselves
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateAnimation;

impl AnimationHost for ImmediateAnimation {
    fn start_exit(&self, message_id: Uuid) -> Result<(), BubbleError> {
        tracing::debug!("[BUBBLE] Exit animation started for {}", message_id);
        Ok(())
    }
}
