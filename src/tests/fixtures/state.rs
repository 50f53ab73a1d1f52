use crate::modules::attendance::core::timesheet::DEFAULT_STANDARD_MINUTES_PER_DAY;
use crate::shared::core::primitives::Minutes;
use crate::shared::infrastructure::timesheet_store::in_memory::InMemoryTimesheetStore;
use crate::shell::state::AppState;
use std::sync::Arc;

/// App state over a fresh in-memory store, with the store handed back for assertions.
pub fn make_test_state() -> (AppState, Arc<InMemoryTimesheetStore>) {
    let store = Arc::new(InMemoryTimesheetStore::new());
    let state = AppState::new(
        store.clone(),
        Minutes::new(DEFAULT_STANDARD_MINUTES_PER_DAY).unwrap(),
    );
    (state, store)
}
