//! Color Constants for the Conversation Theme
//!
//! Slate background with sand-coloured bubbles. Accent is reserved for the
//! "read" receipt so it stands out against the muted sent/delivered checks.

use eframe::egui::Color32;

/// Main chat background
pub const MAIN_CHAT_BG: Color32 = Color32::from_rgb(0xF4, 0xF1, 0xEA);

/// Conversation header background
pub const CHAT_HEADER_BG: Color32 = Color32::from_rgb(0x2B, 0x33, 0x3D);

/// Outgoing bubble
pub const BUBBLE_OUTGOING: Color32 = Color32::from_rgb(0xDC, 0xE8, 0xC6);

/// Incoming bubble
pub const BUBBLE_INCOMING: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Bubble outline
pub const BUBBLE_BORDER: Color32 = Color32::from_rgb(0xC9, 0xC4, 0xB8);

/// Edit panel background
pub const INPUT_BAR_BG: Color32 = Color32::from_rgb(0xE8, 0xE4, 0xDA);

/// Edit panel border
pub const INPUT_BAR_BORDER: Color32 = Color32::from_rgb(0xBF, 0xB8, 0xA8);

/// Header icons and secondary header text
pub const ICONS: Color32 = Color32::from_rgb(0xA7, 0xB4, 0xC2);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF2, 0xF4, 0xF7);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x22, 0x28, 0x30);

/// Message body text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x22, 0x28, 0x30);

/// Muted text and sent/delivered checks
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x7D, 0x86, 0x90);

/// Time label
pub const TIMESTAMP: Color32 = Color32::from_rgb(0x8A, 0x93, 0x9C);

/// Read receipt
pub const ACCENT: Color32 = Color32::from_rgb(0x2F, 0x8F, 0xD8);

/// Errors and destructive actions
pub const ERROR: Color32 = Color32::from_rgb(0xD9, 0x4F, 0x4F);

/// Primary button
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x3B, 0x6E, 0x9E);

/// Primary button hover
pub const BUTTON_PRIMARY_HOVER: Color32 = Color32::from_rgb(0x4A, 0x7F, 0xB0);

/// Secondary button
pub const BUTTON_SECONDARY: Color32 = Color32::from_rgb(0xD6, 0xD1, 0xC4);
