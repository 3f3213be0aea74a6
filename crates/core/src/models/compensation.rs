//! Compensation entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{new_id, EntityId};

/// A salary record tied to exactly one employee.
///
/// `effective_date` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compensation {
    pub id: EntityId,
    pub employee_id: EntityId,
    pub salary: f64,
    pub effective_date: NaiveDate,
}

/// DTO for creating a compensation.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct NewCompensation {
    pub employee_id: EntityId,
    #[validate(range(min = 0.0, message = "salary must not be negative"))]
    pub salary: f64,
    pub effective_date: NaiveDate,
}

impl NewCompensation {
    /// Build the record to insert, with a freshly generated id.
    pub fn into_compensation(self) -> Compensation {
        Compensation {
            id: new_id(),
            employee_id: self.employee_id,
            salary: self.salary,
            effective_date: self.effective_date,
        }
    }
}
