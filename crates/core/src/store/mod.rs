//! Storage seam between the managers and a persistence backend.
//!
//! The managers only ever talk to [`EntityStore`]. [`MemoryStore`] backs tests
//! and local development; `orgchart_db::PgStore` backs PostgreSQL.
//!
//! Implementations must reject a second compensation for the same employee
//! with [`StoreError::Duplicate`](crate::error::StoreError::Duplicate) even
//! when two inserts race, since the manager's pre-check alone cannot
//! guarantee uniqueness.

pub mod memory;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Compensation, Employee, EmployeeDraft, EmployeeWithReports};

pub use memory::MemoryStore;

#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Look up an employee with its compensation resolved.
    async fn get_employee(&self, id: &str) -> StoreResult<Option<Employee>>;

    /// Look up an employee and resolve its immediate direct reports in stored order.
    async fn get_employee_with_direct_reports(
        &self,
        id: &str,
    ) -> StoreResult<Option<EmployeeWithReports>>;

    /// Insert an employee, assigning a fresh id when the draft carries none.
    async fn insert_employee(&self, draft: EmployeeDraft) -> StoreResult<Employee>;

    /// Remove an employee, returning the removed record.
    async fn remove_employee(&self, employee: &Employee) -> StoreResult<Employee>;

    /// Look up the compensation attached to `employee_id`.
    async fn get_compensation(&self, employee_id: &str) -> StoreResult<Option<Compensation>>;

    /// Insert a compensation. Fails with `Duplicate` if the employee already has one.
    async fn insert_compensation(&self, compensation: Compensation) -> StoreResult<Compensation>;

    /// Durability checkpoint. Callers commit after every mutation before
    /// relying on its effects.
    async fn commit(&self) -> StoreResult<()>;

    /// Cheap reachability probe used by the health endpoint.
    async fn health_check(&self) -> StoreResult<()>;
}
