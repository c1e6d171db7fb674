//! Status Presenter
//!
//! Maps delivery status to the glyph shown next to the time label.

use crate::shared::messaging::{ChatMessage, DeliveryStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    SingleCheck,
    DoubleCheck,
}

impl StatusIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            StatusIcon::SingleCheck => "✓",
            StatusIcon::DoubleCheck => "✓✓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Muted,
    Accent,
}

/// Icon plus emphasis for one status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub icon: StatusIcon,
    pub emphasis: Emphasis,
}

pub fn present(status: DeliveryStatus) -> StatusBadge {
    let (icon, emphasis) = match status {
        DeliveryStatus::Sent => (StatusIcon::SingleCheck, Emphasis::Muted),
        DeliveryStatus::Delivered => (StatusIcon::DoubleCheck, Emphasis::Muted),
        DeliveryStatus::Read => (StatusIcon::DoubleCheck, Emphasis::Accent),
    };
    StatusBadge { icon, emphasis }
}

/// Badge for a message, shown only on the viewer's own messages
pub fn present_for(message: &ChatMessage, is_owner: bool) -> Option<StatusBadge> {
    if !is_owner {
        return None;
    }
    message.status.map(present)
}
