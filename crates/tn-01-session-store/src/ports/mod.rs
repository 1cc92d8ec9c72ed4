//! # Ports Module
//!
//! Outbound dependency of the session store: tab-scoped key/value storage.

pub mod outbound;

pub use outbound::*;
