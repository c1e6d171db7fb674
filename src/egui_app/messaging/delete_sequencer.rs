//! Delete Sequencer
//!
//! Orders a deletion in two steps: the local decision to delete (instant, starts
//! the exit animation) and the store-level removal (only after the animation
//! has finished). The list therefore never re-renders the message away while it
//! is still fading out.
//!
//! ```text
//! Idle --begin--> Animating --animation complete--> Committing --ok--> Committed
//!                                                        \--err--> Failed
//! ```
//!
//! The sequence only moves forward. There is no cancel and no retry.

use super::ports::{AnimationHost, ConversationStore, NotificationSink, PendingCommit};
use crate::shared::error::BubbleError;
use std::sync::mpsc::TryRecvError;
use uuid::Uuid;

/// Observable phase of a deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePhase {
    Idle,
    Animating,
    Committing,
    Committed,
    Failed,
}

enum DeleteState {
    Idle,
    Animating,
    Committing(PendingCommit),
    Committed,
    Failed,
}

impl DeleteState {
    fn phase(&self) -> DeletePhase {
        match self {
            DeleteState::Idle => DeletePhase::Idle,
            DeleteState::Animating => DeletePhase::Animating,
            DeleteState::Committing(_) => DeletePhase::Committing,
            DeleteState::Committed => DeletePhase::Committed,
            DeleteState::Failed => DeletePhase::Failed,
        }
    }
}

/// Deletion state for one message
pub struct DeleteSequencer {
    message_id: Uuid,
    failure_text: String,
    state: DeleteState,
}

impl std::fmt::Debug for DeleteSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeleteSequencer")
            .field("message_id", &self.message_id)
            .field("phase", &self.phase())
            .finish()
    }
}

impl DeleteSequencer {
    pub fn new(message_id: Uuid, failure_text: impl Into<String>) -> Self {
        Self {
            message_id,
            failure_text: failure_text.into(),
            state: DeleteState::Idle,
        }
    }

    pub fn phase(&self) -> DeletePhase {
        self.state.phase()
    }

    /// True from `begin` until the sequence ends, and after a successful commit
    pub fn is_deleting(&self) -> bool {
        matches!(
            self.state,
            DeleteState::Animating | DeleteState::Committing(_) | DeleteState::Committed
        )
    }

    /// Start the exit animation. Returns whether the sequence started.
    ///
    /// Only valid from `Idle`; later calls do nothing. If the animation host
    /// refuses, the user is notified and the state stays `Idle`.
    pub fn begin(&mut self, host: &dyn AnimationHost, notifier: &dyn NotificationSink) -> bool {
        if !matches!(self.state, DeleteState::Idle) {
            tracing::debug!("[BUBBLE] Ignoring repeated delete for {} in {:?}", self.message_id, self.phase());
            return false;
        }

        match host.start_exit(self.message_id) {
            Ok(()) => {
                tracing::info!("[BUBBLE] Delete started for {}", self.message_id);
                self.state = DeleteState::Animating;
                true
            }
            Err(e) => {
                tracing::error!("[BUBBLE] Could not start delete for {}: {}", self.message_id, e);
                notifier.report_error(&self.failure_text);
                false
            }
        }
    }

    /// Consume the animation-complete event and ask the store to delete.
    ///
    /// Only the first event after `begin` has an effect.
    pub fn animation_complete(&mut self, store: &dyn ConversationStore) -> bool {
        if !matches!(self.state, DeleteState::Animating) {
            return false;
        }

        tracing::info!("[BUBBLE] Exit animation finished, committing delete for {}", self.message_id);
        self.state = DeleteState::Committing(store.commit_delete(self.message_id));
        true
    }

    /// Check the pending store reply without blocking
    pub fn poll(&mut self, notifier: &dyn NotificationSink) -> DeletePhase {
        let outcome = match &self.state {
            DeleteState::Committing(pending) => match pending.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return DeletePhase::Committing,
                Err(TryRecvError::Disconnected) => Err(BubbleError::Disconnected),
            },
            other => return other.phase(),
        };

        match outcome {
            Ok(()) => {
                tracing::info!("[BUBBLE] Delete committed for {}", self.message_id);
                self.state = DeleteState::Committed;
            }
            Err(e) => {
                tracing::error!("[BUBBLE] Delete failed for {}: {}", self.message_id, e);
                notifier.report_error(&self.failure_text);
                self.state = DeleteState::Failed;
            }
        }
        self.phase()
    }
}
