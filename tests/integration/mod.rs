//! Integration tests for the bubble against recording collaborators

pub mod bubble_scenarios;
pub mod store_flow;
