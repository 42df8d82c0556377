use std::sync::Arc;

use scoring::{RangeTable, RecentHistory};

/// Shared handler state. Each server (or test) owns its own history.
#[derive(Debug, Clone)]
pub struct AppState {
    pub ranges: Arc<RangeTable>,
    pub history: Arc<RecentHistory>,
}

impl AppState {
    pub fn new(ranges: RangeTable, history: RecentHistory) -> Self {
        Self {
            ranges: Arc::new(ranges),
            history: Arc::new(history),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RangeTable::builtin(), RecentHistory::default())
    }
}
