//! # Domain Module
//!
//! Probe results, wallet handles and provider errors.

pub mod errors;
pub mod probe;

pub use errors::*;
pub use probe::*;
