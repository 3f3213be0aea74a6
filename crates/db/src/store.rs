//! sqlx-backed [`EntityStore`].
//!
//! Every statement runs on the pool in its own implicit transaction, so a
//! write is durable once its call returns and [`PgStore::commit`] has nothing
//! left to flush. One-compensation-per-employee is enforced by the
//! `uq_compensations_employee_id` unique index.

use std::collections::HashMap;

use async_trait::async_trait;
use orgchart_core::error::{StoreError, StoreResult};
use orgchart_core::models::{Compensation, Employee, EmployeeDraft, EmployeeWithReports};
use orgchart_core::store::EntityStore;
use orgchart_core::types::new_id;
use sqlx::PgPool;

use crate::error::classify_sqlx_error;
use crate::rows::{CompensationRow, EmployeeRow, COMPENSATION_COLUMNS, EMPLOYEE_COLUMNS};

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn find_employee_row(&self, id: &str) -> StoreResult<Option<EmployeeRow>> {
        let query = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    /// Resolve the direct reports of `manager` in stored order.
    async fn load_direct_reports(&self, manager: &Employee) -> StoreResult<Vec<Employee>> {
        if manager.direct_reports.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ANY($1)");
        let rows = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(&manager.direct_reports)
            .fetch_all(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;

        let query =
            format!("SELECT {COMPENSATION_COLUMNS} FROM compensations WHERE employee_id = ANY($1)");
        let compensations: HashMap<String, Compensation> =
            sqlx::query_as::<_, CompensationRow>(&query)
                .bind(&manager.direct_reports)
                .fetch_all(&self.pool)
                .await
                .map_err(classify_sqlx_error)?
                .into_iter()
                .map(|row| (row.employee_id.clone(), Compensation::from(row)))
                .collect();

        let by_id: HashMap<String, EmployeeRow> =
            rows.into_iter().map(|row| (row.id.clone(), row)).collect();

        // A report id may repeat in the list; each occurrence resolves.
        manager
            .direct_reports
            .iter()
            .map(|report_id| {
                let row = by_id.get(report_id).cloned().ok_or_else(|| {
                    StoreError::Inconsistent(format!(
                        "employee {} lists unknown direct report {report_id}",
                        manager.id
                    ))
                })?;
                Ok(row.into_employee(compensations.get(report_id).cloned()))
            })
            .collect()
    }
}

#[async_trait]
impl EntityStore for PgStore {
    async fn get_employee(&self, id: &str) -> StoreResult<Option<Employee>> {
        let Some(row) = self.find_employee_row(id).await? else {
            return Ok(None);
        };
        let compensation = self.get_compensation(id).await?;
        Ok(Some(row.into_employee(compensation)))
    }

    async fn get_employee_with_direct_reports(
        &self,
        id: &str,
    ) -> StoreResult<Option<EmployeeWithReports>> {
        let Some(employee) = self.get_employee(id).await? else {
            return Ok(None);
        };
        let direct_reports = self.load_direct_reports(&employee).await?;
        Ok(Some(EmployeeWithReports {
            employee,
            direct_reports,
        }))
    }

    async fn insert_employee(&self, mut draft: EmployeeDraft) -> StoreResult<Employee> {
        let id = draft.id.take().unwrap_or_else(new_id);
        let query = format!(
            "INSERT INTO employees (id, first_name, last_name, position, department, direct_reports)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {EMPLOYEE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(&id)
            .bind(&draft.first_name)
            .bind(&draft.last_name)
            .bind(&draft.position)
            .bind(&draft.department)
            .bind(&draft.direct_reports)
            .fetch_one(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;
        let compensation = self.get_compensation(&id).await?;
        Ok(row.into_employee(compensation))
    }

    async fn remove_employee(&self, employee: &Employee) -> StoreResult<Employee> {
        let query = format!("DELETE FROM employees WHERE id = $1 RETURNING {EMPLOYEE_COLUMNS}");
        let row = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(&employee.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)?
            .ok_or_else(|| StoreError::Missing(format!("employee {}", employee.id)))?;
        Ok(row.into_employee(employee.compensation.clone()))
    }

    async fn get_compensation(&self, employee_id: &str) -> StoreResult<Option<Compensation>> {
        let query =
            format!("SELECT {COMPENSATION_COLUMNS} FROM compensations WHERE employee_id = $1");
        let row = sqlx::query_as::<_, CompensationRow>(&query)
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.map(Compensation::from))
    }

    async fn insert_compensation(&self, compensation: Compensation) -> StoreResult<Compensation> {
        let query = format!(
            "INSERT INTO compensations (id, employee_id, salary, effective_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COMPENSATION_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CompensationRow>(&query)
            .bind(&compensation.id)
            .bind(&compensation.employee_id)
            .bind(compensation.salary)
            .bind(compensation.effective_date)
            .fetch_one(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.into())
    }

    async fn commit(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }
}
