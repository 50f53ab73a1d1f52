// Port for loading and saving timesheets, keyed by (employee, month).
//
// Concurrency contract
// - `save` is a compare-and-swap on the timesheet version: it succeeds only when the stored
//   version for the key equals `timesheet.version()` (absent counts as 0) and stores the
//   timesheet with the version incremented. Read-modify-write per key is therefore serializable.
// - Keys are independent of each other.

use crate::modules::attendance::core::timesheet::Timesheet;
use crate::shared::core::primitives::{EmployeeId, YearMonth};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TimesheetStore: Send + Sync {
    async fn find_by(
        &self,
        employee_id: &EmployeeId,
        period: YearMonth,
    ) -> Result<Option<Timesheet>, StoreError>;

    async fn save(&self, timesheet: &Timesheet) -> Result<(), StoreError>;
}

pub mod in_memory;
