//! Ownership Resolver
//!
//! Decides whether the viewer authored a message. Called on every frame because
//! the identity provider may resolve after the first render.

use crate::shared::messaging::ChatMessage;
use uuid::Uuid;

/// True iff the viewer is known and wrote `message`
pub fn is_owner(message: &ChatMessage, current_user_id: Option<Uuid>) -> bool {
    current_user_id.is_some_and(|id| id == message.sender_id)
}
