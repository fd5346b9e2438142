//! Application layer - Use cases and port interfaces
//!
//! Contains the compose/route pipeline and trait definitions
//! for external system interactions.

pub mod compose;
pub mod ports;
pub mod router;

// Re-export use cases
pub use compose::{compose, ComposeDefaults, Operation};
pub use router::{NotifyRouter, DELIVERY_FAILED_ACK};
