//! Domain model structs and DTOs.
//!
//! Each submodule contains the stored entity plus the `Deserialize` input
//! payload used to create it.

pub mod compensation;
pub mod employee;
pub mod reporting;

pub use compensation::{Compensation, NewCompensation};
pub use employee::{Employee, EmployeeDraft, EmployeeWithReports};
pub use reporting::{ReportNode, ReportingStructure};
