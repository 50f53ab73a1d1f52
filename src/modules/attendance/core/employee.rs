use crate::shared::core::primitives::{EmployeeId, PrimitiveError};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    Contract,
    PartTime,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full_time",
            EmploymentType::Contract => "contract",
            EmploymentType::PartTime => "part_time",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Someone who punches in; referenced by id from timesheets and leave requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    employment_type: EmploymentType,
}

impl Employee {
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        employment_type: EmploymentType,
    ) -> Result<Self, PrimitiveError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PrimitiveError::MissingText("employee name"));
        }
        Ok(Self {
            id,
            name,
            employment_type,
        })
    }

    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn employment_type(&self) -> EmploymentType {
        self.employment_type
    }
}
