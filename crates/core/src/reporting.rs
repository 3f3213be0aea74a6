//! Reporting structure resolution.
//!
//! Walks the org chart below a root employee, one store lookup per node, and
//! counts everyone reached. The walk keeps an explicit stack of frames rather
//! than recursing, so chart depth is bounded by heap rather than thread stack.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{CoreError, CoreResult, StoreError};
use crate::models::{Employee, EmployeeWithReports, ReportNode, ReportingStructure};
use crate::store::EntityStore;
use crate::types::is_blank;

/// Default upper bound on employees visited by one traversal.
pub const DEFAULT_MAX_NODES: usize = 10_000;

/// Bounds applied to a single traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverLimits {
    /// Maximum number of reports (excluding the root) a traversal may visit.
    pub max_nodes: usize,
}

impl Default for ResolverLimits {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

/// An employee whose direct reports are still being expanded.
struct Frame {
    employee: Employee,
    pending: std::vec::IntoIter<Employee>,
    children: Vec<ReportNode>,
}

impl Frame {
    fn new(loaded: EmployeeWithReports) -> Self {
        Self {
            children: Vec::with_capacity(loaded.direct_reports.len()),
            employee: loaded.employee,
            pending: loaded.direct_reports.into_iter(),
        }
    }

    fn finish(self) -> ReportNode {
        ReportNode::from_employee(self.employee, self.children)
    }
}

#[derive(Clone)]
pub struct ReportingResolver {
    store: Arc<dyn EntityStore>,
    limits: ResolverLimits,
}

impl ReportingResolver {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self::with_limits(store, ResolverLimits::default())
    }

    pub fn with_limits(store: Arc<dyn EntityStore>, limits: ResolverLimits) -> Self {
        Self { store, limits }
    }

    /// Build the reporting structure rooted at `id`.
    ///
    /// Each direct report is re-fetched with its own direct reports before
    /// descending. Children appear in stored order. An employee reached twice
    /// fails with [`CoreError::EmployeeRevisited`].
    pub async fn resolve(&self, id: &str) -> CoreResult<ReportingStructure> {
        tracing::debug!(employee_id = %id, "Resolving reporting structure");
        if is_blank(id) {
            return Err(CoreError::not_found("Employee", id));
        }

        let root = self
            .store
            .get_employee_with_direct_reports(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Employee", id))?;

        let mut visited = HashSet::from([root.employee.id.clone()]);
        let mut number_of_reports = 0usize;
        let mut ancestors: Vec<Frame> = Vec::new();
        let mut current = Frame::new(root);

        loop {
            if let Some(report) = current.pending.next() {
                if !visited.insert(report.id.clone()) {
                    tracing::warn!(
                        root_id = %id,
                        employee_id = %report.id,
                        "Employee reached twice: shared or cyclic report"
                    );
                    return Err(CoreError::EmployeeRevisited { id: report.id });
                }

                number_of_reports += 1;
                if number_of_reports > self.limits.max_nodes {
                    return Err(CoreError::LimitExceeded(format!(
                        "reporting structure for {id} exceeds {} employees",
                        self.limits.max_nodes
                    )));
                }

                let expanded = self
                    .store
                    .get_employee_with_direct_reports(&report.id)
                    .await?
                    .ok_or_else(|| {
                        StoreError::Inconsistent(format!(
                            "direct report {} of {} could not be loaded",
                            report.id, current.employee.id
                        ))
                    })?;

                ancestors.push(std::mem::replace(&mut current, Frame::new(expanded)));
                continue;
            }

            let node = current.finish();
            match ancestors.pop() {
                Some(mut parent) => {
                    parent.children.push(node);
                    current = parent;
                }
                None => {
                    tracing::debug!(employee_id = %id, number_of_reports, "Reporting structure resolved");
                    return Ok(ReportingStructure {
                        employee: node,
                        number_of_reports,
                    });
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
