//! Core traits for platform-agnostic engine access.
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Thread-safe implementations live with the platform driver

pub mod sync;

pub use sync::{MockState, SharedState};
