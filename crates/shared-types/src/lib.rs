//! # Shared Types Crate
//!
//! This crate contains the domain records every TradingNodes component agrees
//! on: who is logged in, which wallet and chain an address belongs to, what a
//! node listing looks like, and how components raise user-visible notices.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-component types are defined here.
//! - **Opaque Identity**: `UserIdentity` preserves unknown server fields so a
//!   serialise/deserialise cycle never loses data.
//! - **Non-blocking Notices**: Components report outcomes through the
//!   `Notifier` port instead of blocking dialogs.

pub mod entities;
pub mod errors;
pub mod listing;
pub mod notify;

pub use entities::*;
pub use errors::*;
pub use listing::*;
pub use notify::{Notice, NoticeBoard, NoticeLevel, Notifier};
