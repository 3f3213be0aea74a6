//! Development seed data: a small five-person chart with fixed ids.

use crate::error::CoreResult;
use crate::models::EmployeeDraft;
use crate::store::EntityStore;

pub const JOHN_LENNON: &str = "16a596ae-edd3-4847-99fe-c4518e82c86f";
pub const PAUL_MCCARTNEY: &str = "b7839309-3348-463b-a7e3-5de1c168beb3";
pub const RINGO_STARR: &str = "03aa1462-ffa9-4978-901b-7c001562cf6f";
pub const PETE_BEST: &str = "62c1084e-6e34-4630-93fd-9153afb65309";
pub const GEORGE_HARRISON: &str = "c0c2293d-16bd-4603-8e08-638a9d18b22c";

fn seed(
    id: &str,
    first_name: &str,
    last_name: &str,
    position: &str,
    direct_reports: &[&str],
) -> EmployeeDraft {
    EmployeeDraft {
        id: Some(id.to_string()),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        position: position.to_string(),
        department: "Engineering".to_string(),
        direct_reports: direct_reports.iter().map(|r| r.to_string()).collect(),
    }
}

/// The seed chart: John Lennon manages Paul McCartney and Ringo Starr;
/// Ringo Starr manages Pete Best and George Harrison.
pub fn seed_employees() -> Vec<EmployeeDraft> {
    vec![
        seed(
            JOHN_LENNON,
            "John",
            "Lennon",
            "Development Manager",
            &[PAUL_MCCARTNEY, RINGO_STARR],
        ),
        seed(PAUL_MCCARTNEY, "Paul", "McCartney", "Developer I", &[]),
        seed(
            RINGO_STARR,
            "Ringo",
            "Starr",
            "Developer V",
            &[PETE_BEST, GEORGE_HARRISON],
        ),
        seed(PETE_BEST, "Pete", "Best", "Developer II", &[]),
        seed(GEORGE_HARRISON, "George", "Harrison", "Developer III", &[]),
    ]
}

/// Insert any seed employees not already present. Returns how many were inserted.
pub async fn seed_store(store: &dyn EntityStore) -> CoreResult<usize> {
    let mut inserted = 0;
    for draft in seed_employees() {
        let id = draft.id.clone().unwrap_or_default();
        if store.get_employee(&id).await?.is_some() {
            tracing::debug!(employee_id = %id, "Seed employee already present");
            continue;
        }
        store.insert_employee(draft).await?;
        inserted += 1;
    }
    store.commit().await?;
    tracing::info!(inserted, "Seed data applied");
    Ok(inserted)
}
