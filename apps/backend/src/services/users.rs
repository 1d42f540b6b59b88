//! Account registration and credential verification.

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::repos::users::{self, User};

/// Result of a successful register/login: the account plus the email it
/// authenticated with (emails live on the credentials row, not the user).
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub email: String,
}

/// Create a new account with a salted one-way password hash.
///
/// Fails with a `UNIQUE_EMAIL` conflict if the email is already registered.
/// The user row and its credentials row are created in one transaction; the
/// unique index on `user_credentials.email` backstops concurrent registrations.
pub async fn register(
    db: &DatabaseConnection,
    full_name: &str,
    email: &str,
    password: &str,
) -> Result<AuthenticatedUser, AppError> {
    if users::find_credentials_by_email(db, email).await?.is_some() {
        warn!(email = %Redacted(email), "Registration attempt for existing email");
        return Err(AppError::conflict(
            ErrorCode::UniqueEmail,
            "Email already registered",
        ));
    }

    // bcrypt is CPU-bound; keep it off the actix workers.
    let password_owned = password.to_owned();
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password_owned))
        .await
        .map_err(|e| AppError::internal(format!("password hash task failed: {e}")))??;

    let sub = Uuid::new_v4().to_string();

    let txn = db.begin().await.map_err(AppError::from)?;
    let user = users::create_user(&txn, &sub, full_name, false).await?;
    users::create_credentials(&txn, user.id, email, &password_hash).await?;
    txn.commit().await.map_err(AppError::from)?;

    info!(user_id = user.id, email = %Redacted(email), "New account registered");

    Ok(AuthenticatedUser {
        user,
        email: email.to_string(),
    })
}

/// Verify submitted credentials against the credential store.
///
/// Unknown email and password mismatch both fail with the same
/// `INVALID_CREDENTIALS` error so the response does not reveal which
/// of the two was wrong.
pub async fn login(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> Result<AuthenticatedUser, AppError> {
    let Some(credentials) = users::find_credentials_by_email(db, email).await? else {
        debug!(email = %Redacted(email), "Login attempt for unknown email");
        return Err(AppError::invalid_credentials());
    };

    let stored_hash = credentials.password_hash.clone();
    let password_owned = password.to_owned();
    let matches = tokio::task::spawn_blocking(move || verify_password(&password_owned, &stored_hash))
        .await
        .map_err(|e| AppError::internal(format!("password verify task failed: {e}")))??;

    if !matches {
        debug!(user_id = credentials.user_id, "Password mismatch");
        return Err(AppError::invalid_credentials());
    }

    let user = users::find_user_by_id(db, credentials.user_id)
        .await?
        .ok_or_else(|| AppError::internal("credentials row without matching user".to_string()))?;

    let authenticated_email = credentials.email.clone();
    users::touch_last_login(db, credentials).await?;

    debug!(user_id = user.id, "Login successful");

    Ok(AuthenticatedUser {
        user,
        email: authenticated_email,
    })
}
