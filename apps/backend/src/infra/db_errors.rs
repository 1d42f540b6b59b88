//! SeaORM -> DomainError translation helpers.
//!
//! Adapters should convert `sea_orm::DbErr` into `crate::errors::domain::DomainError`
//! here, and higher layers can then map `DomainError` to `AppError` via `From`.

use tracing::warn;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::web::trace_ctx;

/// Extract table.column from SQLite "UNIQUE constraint failed: table.column" error messages.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    if let Some(prefix) = error_msg.find("UNIQUE constraint failed: ") {
        let rest = &error_msg[prefix + "UNIQUE constraint failed: ".len()..];
        return rest.split_whitespace().next();
    }
    None
}

/// Map SQLite table.column format to domain-specific conflict errors.
fn map_sqlite_table_column_to_conflict(table_column: &str) -> Option<(ConflictKind, &'static str)> {
    match table_column {
        "user_credentials.email" => {
            Some((ConflictKind::UniqueEmail, "Email already registered"))
        }
        "users.sub" => Some((
            ConflictKind::Other("UniqueSub".into()),
            "User identifier already exists",
        )),
        "doctors.user_id" => Some((
            ConflictKind::DoctorAlreadyApplied,
            "A doctor profile already exists for this account",
        )),
        _ => None,
    }
}

/// Map PostgreSQL constraint names to domain-specific conflict errors.
fn map_postgres_constraint_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if error_msg.contains("user_credentials_email_key")
        || error_msg.contains("idx_user_credentials_email")
    {
        return Some((ConflictKind::UniqueEmail, "Email already registered"));
    }
    if error_msg.contains("users_sub_key") || error_msg.contains("idx_users_sub") {
        return Some((
            ConflictKind::Other("UniqueSub".into()),
            "User identifier already exists",
        ));
    }
    if error_msg.contains("doctors_user_id_key") || error_msg.contains("idx_doctors_user_id") {
        return Some((
            ConflictKind::DoctorAlreadyApplied,
            "A doctor profile already exists for this account",
        ));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    // Unique violations: try SQLite's message format first, then Postgres
    // constraint names.
    if let Some(table_column) = extract_sqlite_table_column(&error_msg) {
        if let Some((kind, detail)) = map_sqlite_table_column_to_conflict(table_column) {
            warn!(trace_id = %trace_id, constraint = table_column, "Unique constraint violation");
            return DomainError::conflict(kind, detail);
        }
    }
    if let Some((kind, detail)) = map_postgres_constraint_to_conflict(&error_msg) {
        warn!(trace_id = %trace_id, "Unique constraint violation");
        return DomainError::conflict(kind, detail);
    }

    warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unmapped database error");
    DomainError::infra(
        InfraErrorKind::Other("Database error".to_string()),
        "Database operation failed",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_unique_email_maps_to_conflict() {
        let err = sea_orm::DbErr::Custom(
            "UNIQUE constraint failed: user_credentials.email".to_string(),
        );
        let domain = map_db_err(err);
        assert!(matches!(
            domain,
            DomainError::Conflict(ConflictKind::UniqueEmail, _)
        ));
    }

    #[test]
    fn postgres_unique_email_maps_to_conflict() {
        let err = sea_orm::DbErr::Custom(
            "duplicate key value violates unique constraint \"idx_user_credentials_email\""
                .to_string(),
        );
        let domain = map_db_err(err);
        assert!(matches!(
            domain,
            DomainError::Conflict(ConflictKind::UniqueEmail, _)
        ));
    }

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err = sea_orm::DbErr::RecordNotFound("users".to_string());
        let domain = map_db_err(err);
        assert!(matches!(domain, DomainError::NotFound(_, _)));
    }

    #[test]
    fn unknown_errors_map_to_infra_without_leaking_detail() {
        let err = sea_orm::DbErr::Custom("password=hunter2 connection refused".to_string());
        let domain = map_db_err(err);
        match domain {
            DomainError::Infra(_, detail) => assert_eq!(detail, "Database operation failed"),
            other => panic!("expected infra error, got {other:?}"),
        }
    }
}
