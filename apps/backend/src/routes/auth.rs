use std::time::SystemTime;

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::mint_access_token;
use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::validated_json::ValidatedJson;
use crate::middleware::jwt_extract::JwtExtract;
use crate::services::users::{self, AuthenticatedUser};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Public account view. Never carries the password hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub is_admin: bool,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

fn auth_response(
    authenticated: AuthenticatedUser,
    security: &crate::state::security_config::SecurityConfig,
) -> Result<AuthResponse, AppError> {
    let token = mint_access_token(
        &authenticated.user.sub,
        &authenticated.email,
        SystemTime::now(),
        security,
    )?;

    Ok(AuthResponse {
        token,
        user: UserResponse {
            id: authenticated.user.id,
            full_name: authenticated.user.full_name,
            email: authenticated.email,
            is_admin: authenticated.user.is_admin,
        },
    })
}

/// Register a new account and hand back a fresh access token.
async fn register(
    body: ValidatedJson<RegisterRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();

    if req.full_name.trim().is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::ValidationError,
            "Full name cannot be empty".to_string(),
        ));
    }
    if req.email.trim().is_empty() || !req.email.contains('@') {
        return Err(AppError::bad_request(
            ErrorCode::InvalidEmail,
            "A valid email address is required".to_string(),
        ));
    }
    if req.password.is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::ValidationError,
            "Password cannot be empty".to_string(),
        ));
    }

    let db = require_db(&app_state)?;

    let authenticated =
        users::register(db, req.full_name.trim(), req.email.trim(), &req.password).await?;
    let response = auth_response(authenticated, &app_state.security)?;

    Ok(HttpResponse::Created().json(response))
}

/// Verify credentials and hand back a fresh access token.
async fn login(
    body: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();

    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::ValidationError,
            "Email and password are required".to_string(),
        ));
    }

    let db = require_db(&app_state)?;

    let authenticated = users::login(db, req.email.trim(), &req.password).await?;
    let response = auth_response(authenticated, &app_state.security)?;

    Ok(HttpResponse::Ok().json(response))
}

/// Return the authenticated account, for session restore on the client.
///
/// Token verification happens in the `JwtExtract` wrap on this resource;
/// `CurrentUser` re-resolves the account row so a stale token for a
/// deleted account cannot restore a session.
async fn me(current_user: CurrentUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(UserResponse {
        id: current_user.id,
        full_name: current_user.full_name,
        email: current_user.email,
        is_admin: current_user.is_admin,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/register").route(web::post().to(register)))
        .service(web::resource("/login").route(web::post().to(login)))
        .service(
            web::resource("/me")
                .wrap(JwtExtract)
                .route(web::get().to(me)),
        );
}
