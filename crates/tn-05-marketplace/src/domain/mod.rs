//! # Domain Module
//!
//! Listing query, the filter/sort pipeline, dashboard totals.

pub mod config;
pub mod errors;
pub mod pipeline;
pub mod query;
pub mod stats;

pub use config::*;
pub use errors::*;
pub use pipeline::*;
pub use query::*;
pub use stats::*;
