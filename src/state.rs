use std::sync::Arc;
use std::time::Instant;

use crate::store::CardStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CardStore>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(store: Arc<dyn CardStore>) -> Self {
        Self {
            store,
            started_at: Instant::now(),
        }
    }

    /// Seconds since this state was created.
    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
