//! Common test utilities and helpers
//!
//! - Recording collaborators that count calls and let a test decide when a
//!   delete reply arrives
//! - A harness that bundles them into a `BubbleContext`
//! - Custom assertion macros

pub mod assertions;
pub mod fakes;

pub use fakes::*;
