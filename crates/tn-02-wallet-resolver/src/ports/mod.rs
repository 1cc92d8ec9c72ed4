//! # Ports Module
//!
//! Outbound capability probes over browser-injected wallet globals.

pub mod outbound;

pub use outbound::*;
