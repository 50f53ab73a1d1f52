use crate::modules::attendance::core::leave_request::{LeaveRequest, RequestStatus};
use crate::shared::core::primitives::{EmployeeId, RequestId};
use crate::shared::infrastructure::leave_request_store::LeaveRequestStore;
use crate::shared::infrastructure::timesheet_store::StoreError;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryLeaveRequestStore {
    requests: RwLock<BTreeMap<String, LeaveRequest>>,
    is_offline: bool,
}

impl InMemoryLeaveRequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Leave request store offline".into()));
        }
        Ok(())
    }

    async fn list_where(
        &self,
        status: Option<RequestStatus>,
        keep: impl Fn(&LeaveRequest) -> bool + Send,
    ) -> Result<Vec<LeaveRequest>, StoreError> {
        self.ensure_online()?;
        let guard = self.requests.read().await;
        Ok(guard
            .values()
            .filter(|r| status.is_none_or(|s| r.status() == s))
            .filter(|r| keep(r))
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl LeaveRequestStore for InMemoryLeaveRequestStore {
    async fn find_by_id(&self, id: &RequestId) -> Result<Option<LeaveRequest>, StoreError> {
        self.ensure_online()?;
        Ok(self.requests.read().await.get(id.as_str()).cloned())
    }

    async fn save(&self, request: &LeaveRequest) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.requests
            .write()
            .await
            .insert(request.id().to_string(), request.clone());
        Ok(())
    }

    async fn list_by_employee(
        &self,
        employee_id: &EmployeeId,
        status: Option<RequestStatus>,
    ) -> Result<Vec<LeaveRequest>, StoreError> {
        self.list_where(status, |r| r.employee_id() == employee_id)
            .await
    }

    async fn list_for_approver(
        &self,
        approver_id: &EmployeeId,
        status: Option<RequestStatus>,
    ) -> Result<Vec<LeaveRequest>, StoreError> {
        self.list_where(status, |r| match r.reviewer_id() {
            Some(reviewer) => reviewer == approver_id,
            None => r.is_pending() && r.employee_id() != approver_id,
        })
        .await
    }
}

#[cfg(test)]
mod in_memory_leave_request_store_tests {
    use super::*;
    use crate::modules::attendance::core::leave_request::LeaveType;
    use crate::shared::core::primitives::DateRange;
    use crate::tests::fixtures::{date, employee};
    use rstest::{fixture, rstest};

    fn someone(id: &str) -> EmployeeId {
        EmployeeId::new(id).unwrap()
    }

    fn request_by(employee_id: EmployeeId, day: u32) -> LeaveRequest {
        let range = DateRange::new(date(2024, 2, day), date(2024, 2, day)).unwrap();
        LeaveRequest::new(employee_id, range, LeaveType::Unpaid, "errands").unwrap()
    }

    #[fixture]
    fn store() -> InMemoryLeaveRequestStore {
        InMemoryLeaveRequestStore::new()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_save_find_and_replace_a_request(store: InMemoryLeaveRequestStore) {
        let mut request = request_by(employee(), 5);
        store.save(&request).await.unwrap();
        assert_eq!(
            store.find_by_id(request.id()).await.unwrap().as_ref(),
            Some(&request)
        );

        request.approve(someone("MGR001"), None).unwrap();
        store.save(&request).await.unwrap();
        let found = store.find_by_id(request.id()).await.unwrap().unwrap();
        assert_eq!(found.status(), RequestStatus::Approved);

        let unknown = RequestId::new("missing").unwrap();
        assert!(store.find_by_id(&unknown).await.unwrap().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_by_employee_with_an_optional_status(
        store: InMemoryLeaveRequestStore,
    ) {
        let first = request_by(employee(), 5);
        let mut second = request_by(employee(), 6);
        second.reject(someone("MGR001"), None).unwrap();
        store.save(&first).await.unwrap();
        store.save(&second).await.unwrap();
        store.save(&request_by(someone("EMP002"), 5)).await.unwrap();

        let all = store.list_by_employee(&employee(), None).await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|r| r.employee_id() == &employee()));

        let pending = store
            .list_by_employee(&employee(), Some(RequestStatus::Pending))
            .await
            .unwrap();
        assert_eq!(pending, vec![first]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_open_and_reviewed_requests_for_an_approver(
        store: InMemoryLeaveRequestStore,
    ) {
        let manager = someone("MGR001");
        let open = request_by(employee(), 5);
        let mut reviewed = request_by(employee(), 6);
        reviewed.approve(manager.clone(), None).unwrap();
        let mut reviewed_by_other = request_by(someone("EMP002"), 7);
        reviewed_by_other.reject(someone("MGR002"), None).unwrap();
        let own = request_by(manager.clone(), 8);
        for r in [&open, &reviewed, &reviewed_by_other, &own] {
            store.save(r).await.unwrap();
        }

        let listed = store.list_for_approver(&manager, None).await.unwrap();
        let ids: Vec<_> = listed.iter().map(|r| r.id().clone()).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(open.id()));
        assert!(ids.contains(reviewed.id()));

        let approved = store
            .list_for_approver(&manager, Some(RequestStatus::Approved))
            .await
            .unwrap();
        assert_eq!(approved, vec![reviewed]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_store_is_offline(mut store: InMemoryLeaveRequestStore) {
        store.toggle_offline();
        let request = request_by(employee(), 5);
        assert!(
            store
                .save(&request)
                .await
                .unwrap_err()
                .to_string()
                .contains("Leave request store offline")
        );
        assert!(store.find_by_id(request.id()).await.is_err());
        assert!(store.list_by_employee(&employee(), None).await.is_err());
    }
}
