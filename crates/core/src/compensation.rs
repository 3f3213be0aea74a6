//! Compensation lookup and the one-compensation-per-employee rule.

use std::sync::Arc;

use validator::Validate;

use crate::error::{CoreError, CoreResult, StoreError};
use crate::models::{Compensation, NewCompensation};
use crate::store::EntityStore;
use crate::types::is_blank;

const ENTITY: &str = "Compensation";

#[derive(Clone)]
pub struct CompensationManager {
    store: Arc<dyn EntityStore>,
}

impl CompensationManager {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Fetch the compensation of `employee_id`.
    ///
    /// A blank id, an unknown employee and an employee without compensation
    /// all yield [`CoreError::NotFound`].
    pub async fn get_by_employee_id(&self, employee_id: &str) -> CoreResult<Compensation> {
        tracing::debug!(employee_id = %employee_id, "Fetching compensation");
        if is_blank(employee_id) {
            return Err(CoreError::not_found(ENTITY, employee_id));
        }
        let employee = self
            .store
            .get_employee(employee_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Employee", employee_id))?;
        employee
            .compensation
            .ok_or_else(|| CoreError::not_found(ENTITY, employee_id))
    }

    /// Create the compensation for an employee that has none yet.
    ///
    /// The pre-check rejects the common case early; a concurrent create that
    /// wins the race surfaces as a store `Duplicate`, which maps to the same
    /// [`CoreError::AlreadyExists`].
    pub async fn create(&self, request: Option<NewCompensation>) -> CoreResult<Compensation> {
        let Some(request) = request else {
            return Err(CoreError::not_found("Employee", ""));
        };
        tracing::debug!(employee_id = %request.employee_id, "Creating compensation");

        request
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        if is_blank(&request.employee_id) {
            return Err(CoreError::not_found("Employee", request.employee_id));
        }

        let employee = self
            .store
            .get_employee(&request.employee_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Employee", request.employee_id.as_str()))?;

        if employee.compensation.is_some() {
            return Err(already_exists(employee.id));
        }

        let compensation = match self
            .store
            .insert_compensation(request.into_compensation())
            .await
        {
            Ok(compensation) => compensation,
            Err(StoreError::Duplicate(_)) => return Err(already_exists(employee.id)),
            Err(err) => return Err(err.into()),
        };
        self.store.commit().await?;

        tracing::info!(
            employee_id = %compensation.employee_id,
            compensation_id = %compensation.id,
            "Compensation created"
        );
        Ok(compensation)
    }
}

fn already_exists(employee_id: String) -> CoreError {
    tracing::warn!(employee_id = %employee_id, "Compensation already exists");
    CoreError::AlreadyExists {
        entity: ENTITY,
        id: employee_id,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use super::*;
    use crate::error::StoreResult;
    use crate::models::{Employee, EmployeeDraft, EmployeeWithReports};
    use crate::store::MemoryStore;
    use crate::test_helpers::{insert_chart, CountingStore};

    fn request(employee_id: &str, salary: f64, (y, m, d): (i32, u32, u32)) -> NewCompensation {
        NewCompensation {
            employee_id: employee_id.to_string(),
            salary,
            effective_date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        }
    }

    async fn manager_with_employee(id: &str) -> (Arc<MemoryStore>, CompensationManager) {
        let store = Arc::new(MemoryStore::new());
        insert_chart(&*store, &[(id, &[])]).await;
        (store.clone(), CompensationManager::new(store))
    }

    #[tokio::test]
    async fn employee_without_compensation_is_not_found() {
        let (_, manager) = manager_with_employee("X").await;
        assert_matches!(
            manager.get_by_employee_id("X").await,
            Err(CoreError::NotFound { entity: "Compensation", .. })
        );
    }

    #[tokio::test]
    async fn unknown_and_blank_employee_are_not_found() {
        let store = Arc::new(CountingStore::default());
        let manager = CompensationManager::new(store.clone());

        assert_matches!(manager.get_by_employee_id("").await, Err(CoreError::NotFound { .. }));
        assert_eq!(store.reads(), 0);
        assert_matches!(
            manager.get_by_employee_id("JasonNewstead").await,
            Err(CoreError::NotFound { entity: "Employee", .. })
        );
    }

    #[tokio::test]
    async fn create_then_get_round_trip() {
        let (store, manager) = manager_with_employee("X").await;

        let created = manager
            .create(Some(request("X", 120_000.0, (2022, 1, 15))))
            .await
            .unwrap();
        assert_eq!(created.employee_id, "X");
        assert_eq!(created.salary, 120_000.0);
        assert_eq!(created.effective_date, NaiveDate::from_ymd_opt(2022, 1, 15).unwrap());
        assert_eq!(store.commit_count(), 1);

        assert_eq!(manager.get_by_employee_id("X").await.unwrap(), created);
    }

    #[tokio::test]
    async fn second_create_is_rejected_and_first_wins() {
        let (_, manager) = manager_with_employee("james").await;

        manager
            .create(Some(request("james", 11_000.0, (1985, 1, 10))))
            .await
            .unwrap();
        let second = manager
            .create(Some(request("james", 50_000.0, (2022, 1, 10))))
            .await;
        assert_matches!(second, Err(CoreError::AlreadyExists { .. }));

        let stored = manager.get_by_employee_id("james").await.unwrap();
        assert_eq!(stored.salary, 11_000.0);
        assert_eq!(stored.effective_date, NaiveDate::from_ymd_opt(1985, 1, 10).unwrap());
    }

    #[tokio::test]
    async fn unknown_employee_is_not_found_not_conflict() {
        let manager = CompensationManager::new(Arc::new(MemoryStore::new()));
        assert_matches!(
            manager.create(Some(request("JasonNewstead", 55_000.0, (2000, 3, 22)))).await,
            Err(CoreError::NotFound { entity: "Employee", .. })
        );
    }

    #[tokio::test]
    async fn absent_request_is_not_found() {
        let manager = CompensationManager::new(Arc::new(MemoryStore::new()));
        assert_matches!(manager.create(None).await, Err(CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn negative_salary_is_rejected() {
        let (_, manager) = manager_with_employee("X").await;
        assert_matches!(
            manager.create(Some(request("X", -5.0, (2022, 1, 1)))).await,
            Err(CoreError::Validation(_))
        );
    }

    /// Holds every compensation insert until `parties` inserts are waiting, so
    /// concurrent creates all pass the manager's pre-check before any of them
    /// reaches the store.
    struct GatedStore {
        inner: MemoryStore,
        gate: tokio::sync::Barrier,
        duplicates: std::sync::atomic::AtomicUsize,
    }

    impl GatedStore {
        fn new(parties: usize) -> Self {
            Self {
                inner: MemoryStore::new(),
                gate: tokio::sync::Barrier::new(parties),
                duplicates: Default::default(),
            }
        }

        fn duplicates(&self) -> usize {
            self.duplicates.load(std::sync::atomic::Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl EntityStore for GatedStore {
        async fn get_employee(&self, id: &str) -> StoreResult<Option<Employee>> {
            self.inner.get_employee(id).await
        }

        async fn get_employee_with_direct_reports(
            &self,
            id: &str,
        ) -> StoreResult<Option<EmployeeWithReports>> {
            self.inner.get_employee_with_direct_reports(id).await
        }

        async fn insert_employee(&self, draft: EmployeeDraft) -> StoreResult<Employee> {
            self.inner.insert_employee(draft).await
        }

        async fn remove_employee(&self, employee: &Employee) -> StoreResult<Employee> {
            self.inner.remove_employee(employee).await
        }

        async fn get_compensation(&self, employee_id: &str) -> StoreResult<Option<Compensation>> {
            self.inner.get_compensation(employee_id).await
        }

        async fn insert_compensation(&self, compensation: Compensation) -> StoreResult<Compensation> {
            self.gate.wait().await;
            let result = self.inner.insert_compensation(compensation).await;
            if matches!(result, Err(StoreError::Duplicate(_))) {
                self.duplicates.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            }
            result
        }

        async fn commit(&self) -> StoreResult<()> {
            self.inner.commit().await
        }

        async fn health_check(&self) -> StoreResult<()> {
            self.inner.health_check().await
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_creates_yield_exactly_one_success() {
        let store = Arc::new(GatedStore::new(2));
        insert_chart(&*store, &[("X", &[])]).await;
        let manager = CompensationManager::new(store.clone());

        let first = manager.clone();
        let second = manager.clone();
        let a = tokio::spawn(async move {
            first.create(Some(request("X", 1.0, (2022, 1, 1)))).await
        });
        let b = tokio::spawn(async move {
            second.create(Some(request("X", 2.0, (2022, 2, 2)))).await
        });
        let results = [a.await.unwrap(), b.await.unwrap()];

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert_eq!(
            results
                .iter()
                .filter(|r| matches!(r, Err(CoreError::AlreadyExists { .. })))
                .count(),
            1
        );
        // Both creates passed the pre-check; the store rejected the loser.
        assert_eq!(store.duplicates(), 1);

        let winner = results.iter().find_map(|r| r.as_ref().ok()).unwrap();
        assert_eq!(manager.get_by_employee_id("X").await.unwrap(), *winner);
    }
}
