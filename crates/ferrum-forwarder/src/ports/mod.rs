//! # Ports
//!
//! Trait seams of the relay.

pub mod outbound;
