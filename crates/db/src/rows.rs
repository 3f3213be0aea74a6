//! Row structs for the `employees` and `compensations` tables.

use chrono::NaiveDate;
use orgchart_core::models::{Compensation, Employee};
use sqlx::FromRow;

/// Column list shared across employee queries.
pub const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, position, department, direct_reports";

/// Column list shared across compensation queries.
pub const COMPENSATION_COLUMNS: &str = "id, employee_id, salary, effective_date";

#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRow {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    pub direct_reports: Vec<String>,
}

impl EmployeeRow {
    pub fn into_employee(self, compensation: Option<Compensation>) -> Employee {
        Employee {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            position: self.position,
            department: self.department,
            direct_reports: self.direct_reports,
            compensation,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct CompensationRow {
    pub id: String,
    pub employee_id: String,
    pub salary: f64,
    pub effective_date: NaiveDate,
}

impl From<CompensationRow> for Compensation {
    fn from(row: CompensationRow) -> Self {
        Self {
            id: row.id,
            employee_id: row.employee_id,
            salary: row.salary,
            effective_date: row.effective_date,
        }
    }
}
