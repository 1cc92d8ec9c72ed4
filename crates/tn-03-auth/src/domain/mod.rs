//! # Domain Module
//!
//! Errors, configuration and the values a login attempt produces.

pub mod config;
pub mod errors;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
