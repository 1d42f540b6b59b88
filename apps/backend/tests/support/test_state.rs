use backend::config::db::{DbKind, DbProfile};
use backend::infra::state::build_state;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use backend::AppError;

/// Security config with a fixed secret so tests can mint and verify tokens.
pub fn test_security_config() -> SecurityConfig {
    SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes())
}

/// Build an AppState backed by a fresh in-memory SQLite database with the
/// schema migrated. Each call gets its own isolated database.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state()
        .with_db(DbKind::SqliteMemory, DbProfile::Test)
        .with_security(test_security_config())
        .build()
        .await
}
