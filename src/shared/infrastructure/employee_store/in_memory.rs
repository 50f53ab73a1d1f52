use crate::modules::attendance::core::employee::Employee;
use crate::shared::core::primitives::EmployeeId;
use crate::shared::infrastructure::employee_store::EmployeeStore;
use crate::shared::infrastructure::timesheet_store::StoreError;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEmployeeStore {
    employees: RwLock<HashMap<EmployeeId, Employee>>,
    is_offline: bool,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Employee store offline".into()));
        }
        Ok(self.employees.read().await.get(id).cloned())
    }

    async fn save(&self, employee: &Employee) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Employee store offline".into()));
        }
        self.employees
            .write()
            .await
            .insert(employee.id().clone(), employee.clone());
        Ok(())
    }
}
