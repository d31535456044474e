use sea_orm::{DbErr, SqlErr};

/// Returns true when the database rejected a write because of a UNIQUE constraint.
///
/// # Arguments
/// - `err` - The error returned by an insert or update
///
/// # Returns
/// - `true` - The error is a unique constraint violation
/// - `false` - Any other database error
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
