//! Derived reporting structure, computed on demand and never persisted.

use serde::Serialize;

use crate::models::compensation::Compensation;
use crate::models::employee::Employee;
use crate::types::EntityId;

/// An employee expanded with its full reporting subtree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportNode {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    pub compensation: Option<Compensation>,
    pub direct_reports: Vec<ReportNode>,
}

impl ReportNode {
    pub fn from_employee(employee: Employee, direct_reports: Vec<ReportNode>) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            position: employee.position,
            department: employee.department,
            compensation: employee.compensation,
            direct_reports,
        }
    }
}

/// The root employee's subtree plus the count of everyone below it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportingStructure {
    pub employee: ReportNode,
    pub number_of_reports: usize,
}
