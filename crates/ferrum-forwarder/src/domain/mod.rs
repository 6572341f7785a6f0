//! # Forwarder Domain Logic
//!
//! Request entities, the relayed-calldata codec and the relay's failure
//! taxonomy.

pub mod codec;
pub mod entities;
pub mod errors;
