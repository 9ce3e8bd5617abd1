//! Application state for the HTTP server.

use std::sync::Arc;

use crate::clock::Clock;
use crate::db::repository::CalendarRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for store operations
    pub repository: Arc<dyn CalendarRepository>,
    /// Clock injected into the scheduling pipeline
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create a new application state with the given collaborators.
    pub fn new(repository: Arc<dyn CalendarRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}
