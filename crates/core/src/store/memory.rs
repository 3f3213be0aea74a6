//! In-process [`EntityStore`] for tests and local development.
//!
//! All state lives behind a single `tokio::sync::RwLock`; every mutation runs
//! under the write guard, so the one-compensation-per-employee check and the
//! insert are atomic. Nothing survives a restart.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::EntityStore;
use crate::error::{StoreError, StoreResult};
use crate::models::{Compensation, Employee, EmployeeDraft, EmployeeWithReports};
use crate::types::new_id;

#[derive(Debug, Default)]
struct Tables {
    /// Stored without compensation; it is resolved from `compensations` on read.
    employees: HashMap<String, Employee>,
    /// Keyed by employee id.
    compensations: HashMap<String, Compensation>,
}

impl Tables {
    fn resolve(&self, id: &str) -> Option<Employee> {
        let mut employee = self.employees.get(id)?.clone();
        employee.compensation = self.compensations.get(id).cloned();
        Some(employee)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    commits: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of commits issued so far.
    pub fn commit_count(&self) -> u64 {
        self.commits.load(Ordering::SeqCst)
    }

    /// Number of stored employees.
    pub async fn employee_count(&self) -> usize {
        self.tables.read().await.employees.len()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn get_employee(&self, id: &str) -> StoreResult<Option<Employee>> {
        Ok(self.tables.read().await.resolve(id))
    }

    async fn get_employee_with_direct_reports(
        &self,
        id: &str,
    ) -> StoreResult<Option<EmployeeWithReports>> {
        let tables = self.tables.read().await;
        let Some(employee) = tables.resolve(id) else {
            return Ok(None);
        };

        let direct_reports = employee
            .direct_reports
            .iter()
            .map(|report_id| {
                tables.resolve(report_id).ok_or_else(|| {
                    StoreError::Inconsistent(format!(
                        "employee {id} lists unknown direct report {report_id}"
                    ))
                })
            })
            .collect::<StoreResult<Vec<_>>>()?;

        Ok(Some(EmployeeWithReports {
            employee,
            direct_reports,
        }))
    }

    async fn insert_employee(&self, mut draft: EmployeeDraft) -> StoreResult<Employee> {
        let id = draft.id.take().unwrap_or_else(new_id);
        let mut tables = self.tables.write().await;
        if tables.employees.contains_key(&id) {
            return Err(StoreError::Duplicate(format!("employee {id}")));
        }
        let mut employee = draft.into_employee(id.clone());
        tables.employees.insert(id.clone(), employee.clone());
        // A compensation may outlive a replaced employee and reattach here.
        employee.compensation = tables.compensations.get(&id).cloned();
        Ok(employee)
    }

    async fn remove_employee(&self, employee: &Employee) -> StoreResult<Employee> {
        let mut tables = self.tables.write().await;
        let mut removed = tables
            .employees
            .remove(&employee.id)
            .ok_or_else(|| StoreError::Missing(format!("employee {}", employee.id)))?;
        removed.compensation = tables.compensations.get(&employee.id).cloned();
        Ok(removed)
    }

    async fn get_compensation(&self, employee_id: &str) -> StoreResult<Option<Compensation>> {
        Ok(self.tables.read().await.compensations.get(employee_id).cloned())
    }

    async fn insert_compensation(&self, compensation: Compensation) -> StoreResult<Compensation> {
        let mut tables = self.tables.write().await;
        if tables.compensations.contains_key(&compensation.employee_id) {
            return Err(StoreError::Duplicate(format!(
                "compensation for employee {}",
                compensation.employee_id
            )));
        }
        tables
            .compensations
            .insert(compensation.employee_id.clone(), compensation.clone());
        Ok(compensation)
    }

    async fn commit(&self) -> StoreResult<()> {
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
