//! Navigator that records every navigation instead of performing it.

use crate::domain::Route;
use crate::ports::outbound::Navigator;
use parking_lot::Mutex;
use tracing::info;

/// Recording navigator.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes navigated to, oldest first.
    pub fn history(&self) -> Vec<Route> {
        self.history.lock().clone()
    }

    /// Most recent navigation.
    pub fn current(&self) -> Option<Route> {
        self.history.lock().last().cloned()
    }

    /// How many times `route` was navigated to.
    pub fn count(&self, route: &Route) -> usize {
        self.history.lock().iter().filter(|r| *r == route).count()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &Route) {
        info!("[tn-04] Navigate to {}", route);
        self.history.lock().push(route.clone());
    }
}
