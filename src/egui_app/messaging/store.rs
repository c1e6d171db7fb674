//! In-Memory Conversation Store
//!
//! Canonical message list for the demo app and tests. Deletes reply over a
//! channel like a network-backed store would; with a latency configured the
//! reply comes from a worker thread after a tokio sleep.

use super::ports::{CommitResult, ConversationStore, PendingCommit};
use crate::shared::error::BubbleError;
use crate::shared::messaging::ChatMessage;
use std::sync::mpsc::channel;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Default)]
struct StoreInner {
    messages: Vec<ChatMessage>,
    edit_target: Option<ChatMessage>,
    fail_next_delete: bool,
}

impl StoreInner {
    fn remove(&mut self, id: Uuid) -> CommitResult {
        if self.fail_next_delete {
            self.fail_next_delete = false;
            return Err(BubbleError::store("delete rejected by server"));
        }
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        if self.messages.len() == before {
            return Err(BubbleError::not_found(id));
        }
        if self.edit_target.as_ref().is_some_and(|m| m.id == id) {
            self.edit_target = None;
        }
        Ok(())
    }
}

fn lock(inner: &Mutex<StoreInner>) -> MutexGuard<'_, StoreInner> {
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Conversation store kept in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationStore {
    inner: Arc<Mutex<StoreInner>>,
    latency: Duration,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every delete reply by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn insert(&self, message: ChatMessage) {
        lock(&self.inner).messages.push(message);
    }

    /// Snapshot of the list in insertion order
    pub fn messages(&self) -> Vec<ChatMessage> {
        lock(&self.inner).messages.clone()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        lock(&self.inner).messages.iter().any(|m| m.id == id)
    }

    /// Message most recently handed over for editing
    pub fn edit_target(&self) -> Option<ChatMessage> {
        lock(&self.inner).edit_target.clone()
    }

    pub fn cancel_edit(&self) {
        lock(&self.inner).edit_target = None;
    }

    /// Replace the text of a message and mark it edited
    pub fn apply_edit(&self, id: Uuid, text: impl Into<String>) -> Result<(), BubbleError> {
        let mut inner = lock(&self.inner);
        let message = inner
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| BubbleError::not_found(id))?;
        message.text = Some(text.into());
        message.is_edited = true;
        inner.edit_target = None;
        tracing::info!("[BUBBLE] Applied edit to {}", id);
        Ok(())
    }

    /// Make the next delete fail, as a rejecting server would
    pub fn fail_next_delete(&self) {
        lock(&self.inner).fail_next_delete = true;
    }
}

impl ConversationStore for InMemoryConversationStore {
    fn request_edit(&self, message: &ChatMessage) {
        tracing::info!("[BUBBLE] Edit requested for {}", message.id);
        lock(&self.inner).edit_target = Some(message.clone());
    }

    fn commit_delete(&self, id: Uuid) -> PendingCommit {
        let (tx, rx) = channel();

        if self.latency.is_zero() {
            let result = lock(&self.inner).remove(id);
            // The bubble may already be gone; nobody to tell then
            let _ = tx.send(result);
            return rx;
        }

        let inner = Arc::clone(&self.inner);
        let latency = self.latency;
        std::thread::spawn(move || {
            let result = match tokio::runtime::Builder::new_current_thread().enable_time().build() {
                Ok(rt) => rt.block_on(async {
                    tokio::time::sleep(latency).await;
                    lock(&inner).remove(id)
                }),
                Err(e) => {
                    tracing::error!("Failed to create runtime for delete: {}", e);
                    Err(BubbleError::store(format!("Failed to create runtime: {}", e)))
                }
            };
            let _ = tx.send(result);
        });

        rx
    }
}
