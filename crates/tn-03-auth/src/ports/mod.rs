//! # Ports Module
//!
//! Inbound login API and outbound dependencies on the auth API and the
//! identity provider.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
