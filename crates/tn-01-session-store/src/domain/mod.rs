//! # Domain Module
//!
//! Core domain types for the session store.

pub mod errors;
pub mod session;

pub use errors::*;
pub use session::*;
