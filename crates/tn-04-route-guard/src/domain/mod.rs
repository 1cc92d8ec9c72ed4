//! # Domain Module
//!
//! Route table, guard state machine, configuration and errors.

pub mod config;
pub mod errors;
pub mod guard;
pub mod route;

pub use config::*;
pub use errors::*;
pub use guard::*;
pub use route::*;
