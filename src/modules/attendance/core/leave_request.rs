// An employee's request for leave over a range of days, and its one-step review.
//
// Workflow
// - PENDING -> approve | reject -> APPROVED | REJECTED
// - A reviewed request is final; reviewing it again is an invalid transition.

use crate::modules::attendance::core::errors::AttendanceError;
use crate::shared::core::primitives::{DateRange, EmployeeId, PrimitiveError, RequestId};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Paid,
    Unpaid,
    Sick,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Paid => "paid",
            LeaveType::Unpaid => "unpaid",
            LeaveType::Sick => "sick",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRequest {
    id: RequestId,
    employee_id: EmployeeId,
    date_range: DateRange,
    leave_type: LeaveType,
    reason: String,
    status: RequestStatus,
    reviewer_id: Option<EmployeeId>,
    review_comment: Option<String>,
}

impl LeaveRequest {
    pub fn new(
        employee_id: EmployeeId,
        date_range: DateRange,
        leave_type: LeaveType,
        reason: impl Into<String>,
    ) -> Result<Self, PrimitiveError> {
        let reason = reason.into();
        if reason.trim().is_empty() {
            return Err(PrimitiveError::MissingText("reason"));
        }
        Ok(Self {
            id: RequestId::generate(),
            employee_id,
            date_range,
            leave_type,
            reason,
            status: RequestStatus::Pending,
            reviewer_id: None,
            review_comment: None,
        })
    }

    pub fn id(&self) -> &RequestId {
        &self.id
    }

    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    pub fn leave_type(&self) -> LeaveType {
        self.leave_type
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn reviewer_id(&self) -> Option<&EmployeeId> {
        self.reviewer_id.as_ref()
    }

    pub fn review_comment(&self) -> Option<&str> {
        self.review_comment.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    pub fn approve(
        &mut self,
        approver_id: EmployeeId,
        comment: Option<String>,
    ) -> Result<(), AttendanceError> {
        self.review("approve request", RequestStatus::Approved, approver_id, comment)
    }

    pub fn reject(
        &mut self,
        approver_id: EmployeeId,
        comment: Option<String>,
    ) -> Result<(), AttendanceError> {
        self.review("reject request", RequestStatus::Rejected, approver_id, comment)
    }

    fn review(
        &mut self,
        operation: &'static str,
        to: RequestStatus,
        approver_id: EmployeeId,
        comment: Option<String>,
    ) -> Result<(), AttendanceError> {
        if !self.is_pending() {
            return Err(AttendanceError::invalid_state(operation, self.status));
        }
        self.status = to;
        self.reviewer_id = Some(approver_id);
        self.review_comment = comment;
        Ok(())
    }
}
