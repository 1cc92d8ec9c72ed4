//! # Domain Module
//!
//! The authoring form and its validation.

pub mod config;
pub mod errors;
pub mod form;

pub use config::*;
pub use errors::*;
pub use form::*;
