//! Order submission
//!
//! Validates a draft against its channel, normalizes it into the wire
//! shape, and submits it exactly once per user confirmation.

pub mod coordinator;

pub use coordinator::OrderCoordinator;
