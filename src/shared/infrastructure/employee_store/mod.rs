use crate::modules::attendance::core::employee::Employee;
use crate::shared::core::primitives::EmployeeId;
use crate::shared::infrastructure::timesheet_store::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, StoreError>;

    /// Inserts or replaces by employee id.
    async fn save(&self, employee: &Employee) -> Result<(), StoreError>;
}

pub mod in_memory;
