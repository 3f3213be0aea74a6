//! Employee entity model and DTOs.

use serde::{Deserialize, Serialize};

use crate::models::compensation::Compensation;
use crate::types::EntityId;

/// A stored employee with its compensation resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    /// Ids of direct reports in insertion order.
    #[serde(default)]
    pub direct_reports: Vec<EntityId>,
    #[serde(default)]
    pub compensation: Option<Compensation>,
}

/// Payload for creating or replacing an employee.
///
/// `id` is only honoured by the store when inserting seed data or when a
/// replace carries the original id forward; create always clears it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EmployeeDraft {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    #[serde(default)]
    pub direct_reports: Vec<EntityId>,
}

impl EmployeeDraft {
    /// Materialize the draft under `id`. Compensation is resolved by the store.
    pub fn into_employee(self, id: EntityId) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            position: self.position,
            department: self.department,
            direct_reports: self.direct_reports,
            compensation: None,
        }
    }
}

/// An employee together with its immediate direct reports, in stored order.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeWithReports {
    pub employee: Employee,
    pub direct_reports: Vec<Employee>,
}
