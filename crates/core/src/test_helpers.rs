//! Shared fixtures for manager tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Compensation, Employee, EmployeeDraft, EmployeeWithReports};
use crate::store::{EntityStore, MemoryStore};

pub fn draft(id: &str, first_name: &str, direct_reports: &[&str]) -> EmployeeDraft {
    EmployeeDraft {
        id: (!id.is_empty()).then(|| id.to_string()),
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        position: "Developer".to_string(),
        department: "Engineering".to_string(),
        direct_reports: direct_reports.iter().map(|r| r.to_string()).collect(),
    }
}

/// Insert `(id, direct_reports)` pairs with fixed ids.
pub async fn insert_chart(store: &dyn EntityStore, chart: &[(&str, &[&str])]) {
    for (id, reports) in chart {
        store
            .insert_employee(draft(id, &id.to_uppercase(), reports))
            .await
            .unwrap();
    }
}

/// R -> [A, B]; A -> [C, D].
pub async fn scenario_store() -> Arc<CountingStore> {
    let store = Arc::new(CountingStore::default());
    insert_chart(
        &*store,
        &[
            ("r", &["a", "b"]),
            ("a", &["c", "d"]),
            ("b", &[]),
            ("c", &[]),
            ("d", &[]),
        ],
    )
    .await;
    store
}

/// [`MemoryStore`] that counts read calls, to prove blank ids never reach the store.
#[derive(Debug, Default)]
pub struct CountingStore {
    pub inner: MemoryStore,
    reads: AtomicUsize,
}

impl CountingStore {
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl EntityStore for CountingStore {
    async fn get_employee(&self, id: &str) -> StoreResult<Option<Employee>> {
        self.record_read();
        self.inner.get_employee(id).await
    }

    async fn get_employee_with_direct_reports(
        &self,
        id: &str,
    ) -> StoreResult<Option<EmployeeWithReports>> {
        self.record_read();
        self.inner.get_employee_with_direct_reports(id).await
    }

    async fn insert_employee(&self, draft: EmployeeDraft) -> StoreResult<Employee> {
        self.inner.insert_employee(draft).await
    }

    async fn remove_employee(&self, employee: &Employee) -> StoreResult<Employee> {
        self.inner.remove_employee(employee).await
    }

    async fn get_compensation(&self, employee_id: &str) -> StoreResult<Option<Compensation>> {
        self.record_read();
        self.inner.get_compensation(employee_id).await
    }

    async fn insert_compensation(&self, compensation: Compensation) -> StoreResult<Compensation> {
        self.inner.insert_compensation(compensation).await
    }

    async fn commit(&self) -> StoreResult<()> {
        self.inner.commit().await
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.inner.health_check().await
    }
}
