//! Application state for the PTO planner API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::error::{EngineError, EngineResult};
use crate::planner::Planner;

/// Shared application state.
///
/// Holds the planner, which in turn owns the holiday tables and the
/// profile store.
#[derive(Clone)]
pub struct AppState {
    planner: Arc<Planner>,
}

impl AppState {
    /// Creates a new application state around the given planner.
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }

    /// Returns a reference to the planner.
    pub fn planner(&self) -> &Planner {
        &self.planner
    }

    /// Runs a planner operation on tokio's blocking pool.
    ///
    /// Planner operations go through the profile store, which may do
    /// blocking file I/O, so handlers call them through here rather than
    /// on an async worker.
    pub async fn run<T, F>(&self, f: F) -> EngineResult<T>
    where
        F: FnOnce(&Planner) -> EngineResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let planner = Arc::clone(&self.planner);
        tokio::task::spawn_blocking(move || f(&planner))
            .await
            .map_err(|e| EngineError::Storage {
                message: format!("Task join error: {}", e),
            })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HolidayCalendar;
    use crate::store::MemoryStore;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppState>();
    }

    #[tokio::test]
    async fn test_run_executes_on_blocking_pool() {
        let state = AppState::new(Planner::new(
            HolidayCalendar::new(),
            Arc::new(MemoryStore::new()),
        ));
        let summary = state
            .run(|planner| planner.create_profile("alice", "Germany", 20, Vec::new()))
            .await
            .unwrap();
        assert_eq!(summary.remaining, 20);

        let result = state.run(|planner| planner.summary("ghost")).await;
        assert!(matches!(result, Err(EngineError::ProfileNotFound { .. })));
    }

    #[tokio::test]
    async fn test_run_maps_panics_to_storage_error() {
        let state = AppState::new(Planner::new(
            HolidayCalendar::new(),
            Arc::new(MemoryStore::new()),
        ));
        let result: EngineResult<()> = state.run(|_| panic!("store crashed")).await;
        assert!(matches!(result, Err(EngineError::Storage { .. })));
    }
}
