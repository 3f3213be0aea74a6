use orgchart_core::error::StoreError;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Classify a sqlx error into a [`StoreError`].
///
/// - Unique violations map to `Duplicate`, carrying the constraint name.
/// - Everything else maps to `Backend`.
pub fn classify_sqlx_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            let constraint = db_err.constraint().unwrap_or("unknown").to_string();
            return StoreError::Duplicate(constraint);
        }
    }
    tracing::error!(error = %err, "Database error");
    StoreError::Backend(Box::new(err))
}
