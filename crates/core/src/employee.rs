//! Employee create / read / replace.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult, StoreError};
use crate::models::{Employee, EmployeeDraft};
use crate::store::EntityStore;
use crate::types::is_blank;

const ENTITY: &str = "Employee";

#[derive(Clone)]
pub struct EmployeeManager {
    store: Arc<dyn EntityStore>,
}

impl EmployeeManager {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Insert a new employee. Any id on the draft is discarded; the store assigns one.
    pub async fn create(&self, mut draft: EmployeeDraft) -> CoreResult<Employee> {
        tracing::debug!(
            first_name = %draft.first_name,
            last_name = %draft.last_name,
            "Creating employee"
        );
        draft.id = None;
        let employee = self.store.insert_employee(draft).await?;
        self.store.commit().await?;
        tracing::info!(employee_id = %employee.id, "Employee created");
        Ok(employee)
    }

    /// Fetch an employee with compensation resolved.
    pub async fn get_by_id(&self, id: &str) -> CoreResult<Employee> {
        tracing::debug!(employee_id = %id, "Fetching employee");
        if is_blank(id) {
            return Err(CoreError::not_found(ENTITY, id));
        }
        self.store
            .get_employee(id)
            .await?
            .ok_or_else(|| CoreError::not_found(ENTITY, id))
    }

    /// Swap `original` for `replacement`, keeping `original.id`.
    ///
    /// The removal is committed before the insert so the store never sees two
    /// records under one id. Readers may observe a short not-found window
    /// between the two commits.
    pub async fn replace(
        &self,
        original: &Employee,
        mut replacement: EmployeeDraft,
    ) -> CoreResult<Employee> {
        self.store
            .remove_employee(original)
            .await
            .map_err(|err| match err {
                StoreError::Missing(_) => CoreError::not_found(ENTITY, original.id.as_str()),
                other => other.into(),
            })?;
        self.store.commit().await?;

        replacement.id = Some(original.id.clone());
        let employee = self.store.insert_employee(replacement).await?;
        self.store.commit().await?;

        tracing::info!(employee_id = %employee.id, "Employee replaced");
        Ok(employee)
    }

    /// Look up `id` and replace it. Not-found leaves the store untouched.
    pub async fn replace_by_id(&self, id: &str, replacement: EmployeeDraft) -> CoreResult<Employee> {
        let original = self.get_by_id(id).await?;
        self.replace(&original, replacement).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
