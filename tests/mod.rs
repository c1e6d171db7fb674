//! Test suite for chat-bubble
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
