//! Org chart domain core.
//!
//! Holds the data model, the [`store::EntityStore`] seam, and the three
//! managers the HTTP layer calls into: [`employee::EmployeeManager`],
//! [`reporting::ReportingResolver`] and [`compensation::CompensationManager`].

pub mod compensation;
pub mod employee;
pub mod error;
pub mod models;
pub mod reporting;
pub mod seed;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
