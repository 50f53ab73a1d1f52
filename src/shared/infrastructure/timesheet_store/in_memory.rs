use crate::modules::attendance::core::timesheet::Timesheet;
use crate::shared::core::primitives::{EmployeeId, YearMonth};
use crate::shared::infrastructure::timesheet_store::{StoreError, TimesheetStore};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

type Key = (EmployeeId, YearMonth);

#[derive(Default)]
pub struct InMemoryTimesheetStore {
    timesheets: RwLock<HashMap<Key, Timesheet>>,
    is_offline: bool,
    delay_save_ms: AtomicU64,
}

impl InMemoryTimesheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_save_ms(&self, ms: u64) {
        self.delay_save_ms.store(ms, Ordering::Relaxed);
    }

    pub async fn len(&self) -> usize {
        self.timesheets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.timesheets.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl TimesheetStore for InMemoryTimesheetStore {
    async fn find_by(
        &self,
        employee_id: &EmployeeId,
        period: YearMonth,
    ) -> Result<Option<Timesheet>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Timesheet store offline".into()));
        }
        let guard = self.timesheets.read().await;
        Ok(guard.get(&(employee_id.clone(), period)).cloned())
    }

    async fn save(&self, timesheet: &Timesheet) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Timesheet store offline".into()));
        }
        let delay = self.delay_save_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let key = (timesheet.employee_id().clone(), timesheet.period());
        let mut guard = self.timesheets.write().await;
        let actual = guard.get(&key).map(Timesheet::version).unwrap_or(0);
        if actual != timesheet.version() {
            return Err(StoreError::VersionMismatch {
                expected: timesheet.version(),
                actual,
            });
        }
        let mut stored = timesheet.clone();
        stored.mark_saved();
        guard.insert(key, stored);
        Ok(())
    }
}
