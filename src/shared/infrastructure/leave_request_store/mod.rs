// Port for leave requests, keyed by request id.
//
// - `save` inserts or replaces; requests have no concurrent edit path beyond a single review.
// - Listings are ordered by request id.
// - A `None` status filter lists every status.

use crate::modules::attendance::core::leave_request::{LeaveRequest, RequestStatus};
use crate::shared::core::primitives::{EmployeeId, RequestId};
use crate::shared::infrastructure::timesheet_store::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait LeaveRequestStore: Send + Sync {
    async fn find_by_id(&self, id: &RequestId) -> Result<Option<LeaveRequest>, StoreError>;

    async fn save(&self, request: &LeaveRequest) -> Result<(), StoreError>;

    async fn list_by_employee(
        &self,
        employee_id: &EmployeeId,
        status: Option<RequestStatus>,
    ) -> Result<Vec<LeaveRequest>, StoreError>;

    /// Requests `approver_id` can act on or has acted on: pending requests filed by
    /// someone else, plus every request they reviewed.
    async fn list_for_approver(
        &self,
        approver_id: &EmployeeId,
        status: Option<RequestStatus>,
    ) -> Result<Vec<LeaveRequest>, StoreError>;
}

pub mod in_memory;
