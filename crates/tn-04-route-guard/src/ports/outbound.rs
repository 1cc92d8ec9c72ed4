//! # Outbound Ports
//!
//! The router the guard drives.

use crate::domain::Route;

/// Client-side router.
pub trait Navigator: Send + Sync {
    /// Replace the current view with `route`.
    fn navigate(&self, route: &Route);
}
