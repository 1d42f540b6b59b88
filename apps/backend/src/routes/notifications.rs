use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::repos::notifications::Notification;
use crate::services::notifications;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: i64,
    pub kind: String,
    pub message: String,
    pub is_read: bool,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            kind: notification.kind,
            message: notification.message,
            is_read: notification.is_read,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub removed: u64,
}

/// Fetch the inbox; everything returned is marked read as a side effect.
async fn list(
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;

    let inbox = notifications::drain_inbox(db, current_user.id).await?;

    let response: Vec<NotificationResponse> =
        inbox.into_iter().map(NotificationResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// Delete every notification for the calling user.
async fn clear(
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;

    let removed = notifications::clear_inbox(db, current_user.id).await?;

    Ok(HttpResponse::Ok().json(ClearResponse { removed }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list))
            .route(web::delete().to(clear)),
    );
}
